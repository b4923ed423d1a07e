//! Airdate configuration.
//!
//! Loaded from `~/.airdate/config.toml`. Every key is optional; a
//! missing file means defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Airdate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Where the save file lives. Defaults to `~/.airdate/`.
    pub data_dir: Option<PathBuf>,

    /// Where daily puzzle files live. Defaults to `~/.airdate/puzzles/`.
    pub puzzles_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.airdate/config.toml`.
    /// A missing file (or an undeterminable home directory) is not an
    /// error; it means defaults.
    pub fn load_or_default() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        Ok(config)
    }

    /// The config file path: `~/.airdate/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".airdate").join("config.toml"))
    }
}
