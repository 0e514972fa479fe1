//! Configuration types for dayplan.
//!
//! Configuration is a JSON file. Every field has a default, so an empty
//! object (or a missing file when no path is given) yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for dayplan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scheduler behaviour.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Terminal UI settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Scheduler behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Refuse to save an edit whose description is blank.
    ///
    /// Off by default: adding validates the description, editing does not.
    #[serde(default)]
    pub reject_empty_edits: bool,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon set.
    #[serde(default)]
    pub icons: IconStyle,

    /// Input poll / tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            icons: IconStyle::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    /// Apply environment overrides, forcing ASCII icons when `NO_COLOR` is set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            self.icons = IconStyle::Ascii;
        }
        self
    }
}

/// Named color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// High contrast.
    HighContrast,
}

/// Icon rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Nerd Font glyphs.
    Nerd,
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII only.
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
