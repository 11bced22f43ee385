//! Settings location and lifecycle.
//!
//! Resolves the platform config path, creates the directory on first save,
//! and falls back to defaults when no settings file exists yet.

use crate::config::ExportConfig;
use crate::error::{SettingsError, SettingsResult};
use std::path::PathBuf;

const APP_DIR: &str = "isoexport";
const CONFIG_FILE: &str = "config.toml";

/// Loads and stores the [`ExportConfig`] at its platform location.
pub struct SettingsManager;

impl SettingsManager {
    /// Full path of the settings file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Create the settings directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<()> {
        let path = Self::config_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Load the stored config, or defaults when none has been saved.
    pub fn load() -> SettingsResult<ExportConfig> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(ExportConfig::default());
        }
        ExportConfig::load_from_file(&path)
    }

    /// Persist the config, creating the directory on first use.
    pub fn store(config: &ExportConfig) -> SettingsResult<()> {
        Self::ensure_config_dir()?;
        config.save_to_file(&Self::config_file_path()?)
    }
}
