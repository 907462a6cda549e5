//! Application settings and their TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use byeol_core::FieldOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Frame rate used when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Application settings, stored as `byeol.toml` in the platform config
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second the animation loop aims for.
    pub frame_rate: u32,
    /// Fixed RNG seed for a reproducible sky; omitted means a fresh sky
    /// every launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Star field options, the `[field]` table.
    pub field: FieldOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
            field: FieldOptions::default(),
        }
    }
}

impl Settings {
    /// Platform path of the settings file, `<config dir>/byeol.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("byeol.toml"))
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Load from the platform path, answering any problem with defaults.
    ///
    /// A missing file is normal and quiet; an unreadable or unparseable one
    /// logs a warning. Either way the caller gets usable settings.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            debug!("no platform config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring broken settings file");
                Self::default()
            }
        }
    }
}
