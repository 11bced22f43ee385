//! Settings for the export tool.
//!
//! Remembers the user's preferences between runs: default output formats,
//! smoothing strength, and the last export directory. Stored as TOML in
//! the platform configuration directory.

pub mod config;
pub mod error;
pub mod manager;

pub use config::ExportConfig;
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
