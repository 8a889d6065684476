// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");

    // Packaged builds (e.g. Flatpak) set the version explicitly
    let version = std::env::var("CODELENS_VERSION").unwrap_or_else(|_| git_version());

    println!("cargo::rustc-env=GIT_VERSION={}", version);
}

/// Derive a version string from git, falling back to the Cargo version.
fn git_version() -> String {
    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--match", "v*"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string());

    match described {
        Some(v) => v.strip_prefix('v').unwrap_or(&v).to_string(),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}
