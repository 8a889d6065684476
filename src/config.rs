// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling
//!
//! Configuration is stored as JSON under the user config directory
//! (`~/.config/codelens/config.json`). Missing or unreadable files fall
//! back to defaults; unknown fields are ignored so older configs survive
//! upgrades.

use crate::constants::{config_file, scan, schemes};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schemes that get the browsable hint on their launch request
    pub browsable_hint_schemes: Vec<String>,
    /// Whether the caller should close the scan surface after a launch
    pub close_on_launch: bool,
    /// Maximum image dimension for decode processing
    pub scan_max_dimension: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browsable_hint_schemes: schemes::DEFAULT_BROWSABLE_HINT_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            close_on_launch: true, // Scanner is a one-shot surface by default
            scan_max_dimension: scan::DEFAULT_MAX_DIMENSION,
        }
    }
}

impl Config {
    /// Default configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(config_file::APP_DIR).join(config_file::FILE_NAME))
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                debug!(error = %e, "Using default configuration");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> AppResult<()> {
        let path = Self::default_path()
            .ok_or_else(|| AppError::Config("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        if let Err(e) = std::fs::write(path, &json) {
            warn!(path = %path.display(), error = %e, "Failed to write config");
            return Err(e.into());
        }
        debug!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Check whether a scheme should carry the browsable hint
    pub fn wants_browsable_hint(&self, scheme: &str) -> bool {
        self.browsable_hint_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(scheme))
    }
}
