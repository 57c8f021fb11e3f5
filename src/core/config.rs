//! Application configuration management

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Overrides the platform configuration directory when set
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

const SETTINGS_FILE: &str = "settings.json";
const RECENT_FILE: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Primary window geometry
    pub window: WindowConfig,
    /// Log level filter (error, warn, info, debug, trace)
    pub log_level: String,
}

/// Primary window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            min_width: 300.0,
            min_height: 300.0,
        }
    }
}

impl AppConfig {
    /// Directory holding every file the shell persists
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "folio", "Folio").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(SETTINGS_FILE))
    }

    /// Backing file for the recent documents list
    pub fn recent_store_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(RECENT_FILE))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved settings to: {}", path.display());
        Ok(())
    }

    /// Parsed log level, falling back to INFO on anything unrecognised
    pub fn level_filter(&self) -> tracing_subscriber::filter::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO)
    }
}
