// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Scheme classification tables
pub mod schemes {
    /// Schemes accepted as strict URLs (web-ish, standard validators)
    pub const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "file"];

    /// Bare schemes recognized without an `://` authority part
    ///
    /// These match the `magnet:?...`, `mailto:...`, `tel:...`, `geo:...`
    /// shapes commonly found in QR codes.
    pub const BARE_SCHEMES: &[&str] = &["magnet", "mailto", "tel", "geo"];

    /// Deep-link schemes that get the browsable hint by default
    ///
    /// `exp://` links are otherwise prone to being grabbed by an unrelated
    /// default handler; the hint lets resolution fall back to the browser.
    pub const DEFAULT_BROWSABLE_HINT_SCHEMES: &[&str] = &["exp"];
}

/// User-facing labels for resolved actions
pub mod labels {
    /// Label when a specific application resolves: "Open with <app>"
    pub fn open_with(app_name: &str) -> String {
        format!("Open with {}", app_name)
    }

    /// Generic label when no specific application resolves
    pub const OPEN_LINK: &str = "Open link";

    /// Label for plain-text payloads (UI offers copy)
    pub const COPY_TEXT: &str = "Copy Text";

    /// Transient notice shown when launch fails with no handler
    pub const NO_HANDLER_NOTICE: &str = "No application can open this link";
}

/// Scan processing constants
pub mod scan {
    /// Maximum dimension for decode processing (larger images are downscaled)
    ///
    /// QR codes are typically large enough to be detected at this resolution.
    pub const DEFAULT_MAX_DIMENSION: u32 = 640;
}

/// Capability cache constants
pub mod capability {
    /// File name of the cached capability snapshot in the config directory
    pub const CACHE_FILE: &str = "device_caps.json";

    /// Snapshots older than this are re-probed on load
    pub const MAX_AGE_SECS: i64 = 24 * 60 * 60;
}

/// Configuration file constants
pub mod config_file {
    /// Subdirectory under the user config directory
    pub const APP_DIR: &str = "codelens";

    /// Configuration file name
    pub const FILE_NAME: &str = "config.json";
}

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        std::path::Path::new("/.flatpak-info").exists()
    }

    /// Get the runtime environment string (e.g., "Flatpak" or "Native")
    pub fn runtime_environment() -> &'static str {
        if is_flatpak() { "Flatpak" } else { "Native" }
    }
}
