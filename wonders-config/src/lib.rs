//! Persisted settings for the Wonders app.
//!
//! Currently a single process-wide value: the display language. The
//! setting lives in a small TOML file in the platform's data
//! directory; a missing or unreadable file falls back to defaults so a
//! fresh install starts in English without any setup step.
#![allow(missing_docs)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wonders_model::Language;

/// Errors from reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Process-wide user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub language: Language,
}

impl Settings {
    /// Loads settings from `path`. A missing file yields defaults; a
    /// malformed file is an error so a corrupted write does not
    /// silently reset the user's language.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Read { path: path.to_path_buf(), source });
            }
        };

        toml::from_str(&contents)
            .map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })
    }

    /// Like [`load`](Self::load) but degrades any failure to defaults
    /// with a warning, for call sites that must come up regardless.
    pub fn load_or_default(path: &Path) -> Settings {
        Settings::load(path).unwrap_or_else(|err| {
            warn!(%err, "falling back to default settings");
            Settings::default()
        })
    }

    /// Writes the settings to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| SettingsError::Write { path: path.to_path_buf(), source })?;
        }
        let contents = toml::to_string(self)?;
        fs::write(path, contents)
            .map_err(|source| SettingsError::Write { path: path.to_path_buf(), source })
    }
}
