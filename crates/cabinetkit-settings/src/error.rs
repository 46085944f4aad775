//! Error types for the settings crate.
//!
//! Loading and saving a project file can fail; the values inside a project
//! never fail, they are replaced by defaults (see `CabinetProjectConfig::sanitize`).

use cabinetkit_core::ConfigError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing project files.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The project file could not be loaded.
    #[error("Failed to load project: {0}")]
    LoadError(String),

    /// The project file could not be saved.
    #[error("Failed to save project: {0}")]
    SaveError(String),

    /// The config directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// A configuration error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<SettingsError> for cabinetkit_core::Error {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Config(inner) => cabinetkit_core::Error::Config(inner),
            SettingsError::IoError(inner) => cabinetkit_core::Error::Io(inner),
            other => cabinetkit_core::Error::other(other.to_string()),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
