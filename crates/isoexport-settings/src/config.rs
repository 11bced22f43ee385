//! Persisted export preferences.
//!
//! A small config: which formats to write by default, how strong the
//! Gaussian smoothing pass is, and where the last export went. Supports
//! JSON and TOML files; TOML is what the manager writes.

use crate::error::{SettingsError, SettingsResult};
use isoexport_core::FormatSelection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User preferences for the export tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Formats pre-selected when the dialog opens.
    pub formats: FormatSelection,
    /// Gaussian smoothing strength in voxels.
    pub smoothing_sigma: f64,
    /// Directory of the previous export, offered as the starting point of
    /// the folder prompt.
    pub last_directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            formats: FormatSelection::default(),
            smoothing_sigma: 1.0,
            last_directory: None,
        }
    }
}

impl ExportConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML).
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
                format: "JSON",
                reason: e.to_string(),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| SettingsError::Parse {
                format: "TOML",
                reason: e.to_string(),
            })?
        } else {
            return Err(SettingsError::UnsupportedExtension);
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML).
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| SettingsError::Serialize(e.to_string()))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))?
        } else {
            return Err(SettingsError::UnsupportedExtension);
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.smoothing_sigma.is_finite() || self.smoothing_sigma < 0.0 {
            return Err(SettingsError::Invalid(
                "smoothing sigma must be a finite value >= 0".to_string(),
            ));
        }
        Ok(())
    }
}
