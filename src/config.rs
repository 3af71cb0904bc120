//! Configuration management for todoview
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DETAIL_PANEL_DEFAULT_WIDTH, DETAIL_PANEL_MAX_WIDTH,
    DETAIL_PANEL_MIN_WIDTH, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Detail panel width in columns
    pub detail_panel_width: u16,
    /// Draw the task detail panel on the right
    pub show_detail_panel: bool,
    /// Glyph theme for header buttons, checkboxes and stars
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for the date under the list title
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Maximum level written: off, error, warn, info, debug or trace
    pub level: String,
}

/// Reasons a configuration is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sidebar_width must be between {min} and {max} columns, got {value}")]
    SidebarWidth { value: u16, min: u16, max: u16 },
    #[error("detail_panel_width must be between {min} and {max} columns, got {value}")]
    DetailPanelWidth { value: u16, min: u16, max: u16 },
    #[error("invalid date_format '{0}'")]
    DateFormat(String),
    #[error("invalid logging level '{0}'")]
    LogLevel(String),
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            detail_panel_width: DETAIL_PANEL_DEFAULT_WIDTH,
            show_detail_panel: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::LIST_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(SIDEBAR_MIN_WIDTH..=SIDEBAR_MAX_WIDTH).contains(&self.ui.sidebar_width) {
            return Err(ConfigError::SidebarWidth {
                value: self.ui.sidebar_width,
                min: SIDEBAR_MIN_WIDTH,
                max: SIDEBAR_MAX_WIDTH,
            });
        }

        if !(DETAIL_PANEL_MIN_WIDTH..=DETAIL_PANEL_MAX_WIDTH).contains(&self.ui.detail_panel_width) {
            return Err(ConfigError::DetailPanelWidth {
                value: self.ui.detail_panel_width,
                min: DETAIL_PANEL_MIN_WIDTH,
                max: DETAIL_PANEL_MAX_WIDTH,
            });
        }

        if self.display.date_format.is_empty() || !datetime::is_valid_format(&self.display.date_format) {
            return Err(ConfigError::DateFormat(self.display.date_format.clone()));
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todoview Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
