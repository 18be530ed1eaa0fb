//! Garden Plan Settings Crate
//!
//! Handles application configuration: loading, saving and validating the
//! settings file in JSON or TOML form.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, Config, EditorSettings, ExportSettings, LoggingSettings,
    CONFIG_FILE_NAME,
};
pub use error::{ConfigError, SettingsError};

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
