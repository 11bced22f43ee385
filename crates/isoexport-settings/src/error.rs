//! Error types for settings handling.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No platform configuration directory could be determined.
    #[error("No platform configuration directory available")]
    NoConfigDir,

    /// The settings file could not be parsed.
    #[error("Invalid {format} config: {reason}")]
    Parse {
        /// File format name ("TOML" or "JSON").
        format: &'static str,
        /// Parser-reported reason.
        reason: String,
    },

    /// The settings file has an unsupported extension.
    #[error("Config file must be .json or .toml")]
    UnsupportedExtension,

    /// A settings value is out of range.
    #[error("Invalid setting: {0}")]
    Invalid(String),

    /// Serialization failed.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// I/O error reading or writing the settings file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
