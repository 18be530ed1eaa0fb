//! Configuration and settings management for the garden plan editor
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas defaults (initial size preset, grid visibility)
//! - Editor defaults (fill color for new beds)
//! - Export (output directory and document name)
//! - Logging (default filter directive)

use std::path::{Path, PathBuf};

use gardenplan_core::{CanvasPreset, Color};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, SettingsError};
use crate::Result;

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas defaults applied to a new scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Preset a new scene starts with
    pub default_preset: CanvasPreset,
    /// Draw the background grid
    pub show_grid: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            default_preset: CanvasPreset::Medium,
            show_grid: true,
        }
    }
}

/// Editor defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Fill color selected in the color picker at startup
    pub default_fill: Color,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_fill: Color::GRASS,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub output_directory: PathBuf,
    /// Document name, without directory
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            file_name: "garden-plan.pdf".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub editor: EditorSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => {
                Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into())
            }
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unusable config file");
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let file_name = self.export.file_name.trim();
        if file_name.is_empty() {
            return Err(ConfigError::invalid("export.file_name", "must not be empty").into());
        }
        if file_name.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "export.file_name",
                "must be a file name, not a path",
            )
            .into());
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::invalid("logging.filter", "must not be empty").into());
        }

        Ok(())
    }
}

/// Location of the settings file in the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("gardenplan").join(CONFIG_FILE_NAME))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}
