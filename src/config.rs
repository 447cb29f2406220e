//! Persistent editor settings, stored as JSON in the platform config
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tab_width: u32,
    pub indent_width: u32,
    pub dark_mode: bool,
    /// Directory scanned for declaration files at startup.
    pub include_dir: Option<PathBuf>,
    /// Extension of declaration files, e.g. `inc`.
    pub declaration_extension: String,
    /// Files reopened on the next launch.
    pub last_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_width: 4,
            indent_width: 4,
            dark_mode: false,
            include_dir: None,
            declaration_extension: "inc".to_owned(),
            last_files: Vec::new(),
        }
    }
}

/// Default settings location, e.g. `~/.config/pawnpad/settings.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pawnpad").join("settings.json"))
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Loads settings, falling back to defaults when the file does not exist.
    /// A present but unreadable or invalid file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Writes settings atomically: serialize to a sibling temp file, then
    /// rename over the target.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_owned(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        Ok(())
    }
}
