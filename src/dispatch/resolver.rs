// SPDX-License-Identifier: MPL-2.0

//! Handler resolution against the installed-application registry
//!
//! Asks the platform "who can open this link" and produces a display
//! label and optional icon. Resolution is a read-only query: finding no
//! handler is not an error, it just downgrades the label to the generic
//! "Open link" (dispatch will then fail at launch time and fall back).
//!
//! The system implementation queries the freedesktop registry with
//! `xdg-mime query default x-scheme-handler/<scheme>` and reads the
//! resolved desktop entry for its `Name=`, `Icon=` and `Exec=` keys.
//! The launcher consults the same registry before claiming success.

use crate::constants::labels;
use crate::dispatch::classifier::scheme_of;
use crate::dispatch::launcher::LaunchRequest;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, trace};

/// Display data for a resolved handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerInfo {
    /// "Open with <app name>" for a specific handler, "Open link" otherwise
    pub label: String,
    /// The handler's icon name, when a specific one resolved
    pub icon: Option<String>,
}

impl HandlerInfo {
    /// Generic fallback when no specific application resolves
    pub fn generic() -> Self {
        Self {
            label: labels::OPEN_LINK.to_string(),
            icon: None,
        }
    }
}

/// Capability seam for querying the installed-application registry
pub trait HandlerResolver {
    /// Resolve the handler for a launch request; never fails
    fn resolve(&self, request: &LaunchRequest) -> HandlerInfo;
}

/// Resolver backed by the freedesktop handler registry
#[derive(Debug, Clone, Copy, Default)]
pub struct XdgResolver;

impl HandlerResolver for XdgResolver {
    fn resolve(&self, request: &LaunchRequest) -> HandlerInfo {
        let Some(scheme) = scheme_of(&request.uri) else {
            return HandlerInfo::generic();
        };

        let mut lookup = registry_lookup(scheme);

        // Browsable-hinted deep links with no registered handler resolve
        // against the default browser instead of an unrelated default
        if matches!(lookup, RegistryLookup::NoHandler) && request.browsable_hint {
            trace!(scheme, "No scheme handler, applying browsable hint");
            lookup = registry_lookup("https");
        }

        let RegistryLookup::Handler(desktop_id) = lookup else {
            debug!(scheme, "No handler registered");
            return HandlerInfo::generic();
        };

        match load_desktop_entry(&desktop_id) {
            Some(entry) => match entry.name {
                Some(name) => {
                    debug!(scheme, handler = %name, "Resolved handler");
                    HandlerInfo {
                        label: labels::open_with(&name),
                        icon: entry.icon,
                    }
                }
                // Entry exists but is ambiguous; keep the generic label
                None => HandlerInfo::generic(),
            },
            None => {
                debug!(desktop_id = %desktop_id, "Desktop entry not found");
                HandlerInfo::generic()
            }
        }
    }
}

/// Answer from the handler registry for one scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RegistryLookup {
    /// A desktop id is registered for the scheme
    Handler(String),
    /// The registry answered: nothing is registered
    NoHandler,
    /// The registry cannot be queried (`xdg-mime` missing or failing)
    Unavailable,
}

/// Query the default desktop id registered for a scheme
pub(crate) fn registry_lookup(scheme: &str) -> RegistryLookup {
    let output = Command::new("xdg-mime")
        .args(["query", "default", &format!("x-scheme-handler/{}", scheme)])
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if id.is_empty() {
                RegistryLookup::NoHandler
            } else {
                RegistryLookup::Handler(id)
            }
        }
        _ => RegistryLookup::Unavailable,
    }
}

/// Executable of the default web browser, for browsable-hinted launches
pub(crate) fn default_browser_command() -> Option<String> {
    let RegistryLookup::Handler(desktop_id) = registry_lookup("https") else {
        return None;
    };
    load_desktop_entry(&desktop_id)?.exec_command()
}

/// Load and parse a desktop entry by id from the XDG directories
fn load_desktop_entry(desktop_id: &str) -> Option<DesktopEntry> {
    let path = locate_desktop_entry(desktop_id, &desktop_entry_dirs())?;
    let contents = std::fs::read_to_string(&path).ok()?;
    Some(DesktopEntry::parse(&contents))
}

/// XDG application directories, most specific first
fn desktop_entry_dirs() -> Vec<PathBuf> {
    let mut dirs_list = Vec::new();

    if let Some(data_dir) = dirs::data_dir() {
        dirs_list.push(data_dir.join("applications"));
    }

    match std::env::var("XDG_DATA_DIRS") {
        Ok(paths) => {
            for path in std::env::split_paths(&paths) {
                dirs_list.push(path.join("applications"));
            }
        }
        Err(_) => {
            dirs_list.push(PathBuf::from("/usr/local/share/applications"));
            dirs_list.push(PathBuf::from("/usr/share/applications"));
        }
    }

    dirs_list
}

/// Find a desktop entry file by id in the given directories
fn locate_desktop_entry(desktop_id: &str, dirs_list: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs_list {
        let candidate = dir.join(desktop_id);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Keys of interest from a desktop entry's `[Desktop Entry]` group
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DesktopEntry {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub exec: Option<String>,
}

impl DesktopEntry {
    /// Extract the unlocalized `Name=`, `Icon=` and `Exec=` keys
    pub(crate) fn parse(contents: &str) -> Self {
        let mut in_entry_group = false;
        let mut entry = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.starts_with('[') {
                in_entry_group = line == "[Desktop Entry]";
                continue;
            }
            if !in_entry_group {
                continue;
            }
            if let Some(value) = line.strip_prefix("Name=") {
                entry.name.get_or_insert_with(|| value.to_string());
            } else if let Some(value) = line.strip_prefix("Icon=") {
                entry.icon.get_or_insert_with(|| value.to_string());
            } else if let Some(value) = line.strip_prefix("Exec=") {
                entry.exec.get_or_insert_with(|| value.to_string());
            }
        }

        entry
    }

    /// Executable name from the Exec line
    ///
    /// Field codes (`%u`, `%U`, ...) and `env VAR=...` wrappers are
    /// dropped; the argument URI is supplied at launch time.
    pub(crate) fn exec_command(&self) -> Option<String> {
        let exec = self.exec.as_ref()?;
        let mut tokens = exec.split_whitespace().filter(|t| !t.starts_with('%'));
        let mut command = tokens.next()?;
        while command == "env" || command.contains('=') {
            command = tokens.next()?;
        }
        Some(command.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX_ENTRY: &str = "\
[Desktop Entry]
Version=1.0
Name=Firefox
Name[de]=Firefox Browser
GenericName=Web Browser
Icon=firefox
Exec=firefox %u
Type=Application
";

    #[test]
    fn test_parse_desktop_entry() {
        let entry = DesktopEntry::parse(FIREFOX_ENTRY);
        assert_eq!(entry.name.as_deref(), Some("Firefox"));
        assert_eq!(entry.icon.as_deref(), Some("firefox"));
        assert_eq!(entry.exec.as_deref(), Some("firefox %u"));
    }

    #[test]
    fn test_parse_desktop_entry_ignores_other_groups() {
        let contents = "\
[Desktop Action new-window]
Name=New Window

[Desktop Entry]
Name=Thunderbird
Icon=thunderbird
";
        let entry = DesktopEntry::parse(contents);
        assert_eq!(entry.name.as_deref(), Some("Thunderbird"));
        assert_eq!(entry.icon.as_deref(), Some("thunderbird"));
        assert_eq!(entry.exec, None);
    }

    #[test]
    fn test_parse_desktop_entry_missing_keys() {
        let entry = DesktopEntry::parse("[Desktop Entry]\nType=Application\n");
        assert_eq!(entry, DesktopEntry::default());
    }

    #[test]
    fn test_exec_command_strips_field_codes() {
        let entry = DesktopEntry {
            exec: Some("firefox %u".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.exec_command().as_deref(), Some("firefox"));
    }

    #[test]
    fn test_exec_command_skips_env_wrapper() {
        let entry = DesktopEntry {
            exec: Some("env MOZ_ENABLE_WAYLAND=1 firefox %u".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.exec_command().as_deref(), Some("firefox"));
    }

    #[test]
    fn test_exec_command_absent() {
        assert_eq!(DesktopEntry::default().exec_command(), None);
    }

    #[test]
    fn test_locate_desktop_entry() {
        let dir = tempfile::tempdir().unwrap();
        let apps = dir.path().join("applications");
        std::fs::create_dir_all(&apps).unwrap();
        std::fs::write(apps.join("firefox.desktop"), FIREFOX_ENTRY).unwrap();

        let dirs_list = vec![apps.clone()];
        assert_eq!(
            locate_desktop_entry("firefox.desktop", &dirs_list),
            Some(apps.join("firefox.desktop"))
        );
        assert_eq!(locate_desktop_entry("missing.desktop", &dirs_list), None);
    }

    #[test]
    fn test_generic_info_has_no_icon() {
        let info = HandlerInfo::generic();
        assert_eq!(info.label, labels::OPEN_LINK);
        assert!(info.icon.is_none());
    }
}
