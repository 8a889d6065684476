// SPDX-License-Identifier: GPL-3.0-only

//! Platform-capability probe and cache
//!
//! Checks which platform facilities the dispatch path relies on are
//! actually present (the freedesktop handler registry via `xdg-mime`, a
//! URI launcher) and caches the result as JSON next to the configuration
//! so callers get synchronous reads without re-probing. Probing is cheap
//! but spawns processes, so the snapshot is refreshed at startup and kept
//! for the rest of the session.

use crate::constants::{capability, config_file};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

/// Snapshot of platform capabilities relevant to dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// `xdg-mime` is available, so handler resolution can query the registry
    pub handler_registry: bool,
    /// A URI launcher is available (`xdg-open` on PATH)
    pub uri_launcher: bool,
    /// Operating system name at probe time
    pub os: String,
    /// Runtime environment ("Flatpak" or "Native")
    pub runtime: String,
    /// When the snapshot was taken
    pub checked_at: DateTime<Utc>,
}

impl CapabilitySnapshot {
    /// Probe the current platform
    pub fn probe() -> Self {
        let handler_registry = command_available("xdg-mime", &["--version"]);
        let uri_launcher = command_available("xdg-open", &["--version"]);

        info!(
            handler_registry,
            uri_launcher, "Probed platform capabilities"
        );

        Self {
            handler_registry,
            uri_launcher,
            os: std::env::consts::OS.to_string(),
            runtime: crate::constants::app_info::runtime_environment().to_string(),
            checked_at: Utc::now(),
        }
    }

    /// True when the snapshot is older than the cache max age
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        (now - self.checked_at).num_seconds() > capability::MAX_AGE_SECS
    }

    /// Default cache file path
    pub fn cache_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(config_file::APP_DIR).join(capability::CACHE_FILE))
    }

    /// Load the cached snapshot, re-probing when missing or stale
    ///
    /// Always returns a usable snapshot; a failed cache write is logged
    /// and otherwise ignored.
    pub fn load_or_probe() -> Self {
        let path = Self::cache_path();

        if let Some(path) = &path {
            match Self::load_from(path) {
                Ok(snapshot) if !snapshot.is_stale(Utc::now()) => {
                    debug!(path = %path.display(), "Using cached capability snapshot");
                    return snapshot;
                }
                Ok(_) => debug!("Cached capability snapshot is stale"),
                Err(e) => debug!(error = %e, "No usable capability cache"),
            }
        }

        let snapshot = Self::probe();
        if let Some(path) = &path {
            if let Err(e) = snapshot.save_to(path) {
                warn!(path = %path.display(), error = %e, "Failed to cache capabilities");
            }
        }
        snapshot
    }

    /// Load a snapshot from a specific path
    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Save the snapshot to a specific path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Check whether a command runs successfully with the given arguments
fn command_available(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn snapshot() -> CapabilitySnapshot {
        CapabilitySnapshot {
            handler_registry: true,
            uri_launcher: true,
            os: "linux".to_string(),
            runtime: "Native".to_string(),
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_fresh_snapshot_is_not_stale() {
        let snap = snapshot();
        assert!(!snap.is_stale(Utc::now()));
    }

    #[test]
    fn test_old_snapshot_is_stale() {
        let mut snap = snapshot();
        snap.checked_at = Utc::now() - Duration::seconds(capability::MAX_AGE_SECS + 1);
        assert!(snap.is_stale(Utc::now()));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caps.json");

        let snap = snapshot();
        snap.save_to(&path).unwrap();

        let loaded = CapabilitySnapshot::load_from(&path).unwrap();
        assert_eq!(loaded, snap);
    }
}
