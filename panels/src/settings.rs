//! Persisted UI settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preference::{DownloadSource, PreferenceList};
use crate::table::TableOptionsState;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
}

/// Everything the UI remembers between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub tables: TableOptionsState,
    #[serde(default = "DownloadSource::default_preference")]
    pub service_preference: Vec<DownloadSource>,
    /// Target formats for conversion, most preferred first.
    #[serde(default)]
    pub format_preference: Vec<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tables: TableOptionsState::default(),
            service_preference: DownloadSource::default_preference(),
            format_preference: Vec::new(),
        }
    }
}

impl UiSettings {
    /// Editable copy of the service preference.
    pub fn service_list(&self) -> PreferenceList<DownloadSource> {
        PreferenceList::new(self.service_preference.clone())
    }

    /// Editable copy of the format preference.
    pub fn format_list(&self) -> PreferenceList<String> {
        PreferenceList::new(self.format_preference.clone())
    }
}

/// JSON file holding [`UiSettings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<UiSettings, SettingsError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", self.path.display());
                return Ok(UiSettings::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_slice(&bytes).map_err(SettingsError::Deserialization)?;
        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write the settings, creating parent directories as needed.
    pub fn save(&self, settings: &UiSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(settings).map_err(SettingsError::Serialization)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
