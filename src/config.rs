//! Widget configuration persistence
//!
//! Stores the heading, palette and token lists in
//! `~/.config/tokens-input/config.yaml` (`$XDG_CONFIG_HOME` is honored,
//! `%APPDATA%` on Windows). Log files go to a `logs/` directory next to it.
//! Every field is optional; a missing or broken file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::runtime::HostConfig;
use crate::token::TokenSet;

const APP_DIR: &str = "tokens-input";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

fn base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let root = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    root.map(|root| root.join(APP_DIR))
}

/// Where [`TokensConfig::load`] and [`TokensConfig::save`] look
pub fn config_file() -> Option<PathBuf> {
    base_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Directory for the rolling log file, created on demand
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = base_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join(LOGS_DIR);
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Heading above the field (None = built-in default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Palette swatches (empty = built-in palette)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Color>,
    /// Tokens offered as suggestions
    #[serde(default)]
    pub available_tokens: TokenSet,
    /// Tokens committed when the widget is first shown
    #[serde(default)]
    pub initial_tokens: TokenSet,
}

impl TokensConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Optional host settings in the form the widget resolves on show
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            colors: (!self.colors.is_empty()).then(|| self.colors.clone()),
            title: self.title.clone(),
        }
    }
}
