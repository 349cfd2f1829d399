//! Configuration loading for the inspiration panel.
//!
//! All panel settings are loaded from a TOML configuration file. Every
//! section is optional and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete panel configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub override_access: OverrideAccessConfig,
}

impl PanelConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Pause the game clock while the panel is open
    pub pause_game: bool,
    pub show_close_button: bool,
    /// Key that opens and closes the panel, e.g. "I" or "F4"
    pub toggle_key: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Grant Inspirations to Colonists".to_string(),
            width: 900.0,
            height: 600.0,
            pause_game: false,
            show_close_button: true,
            toggle_key: "I".to_string(),
        }
    }
}

/// Message log and sound settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub max_messages: usize,
    pub message_lifetime_secs: f64,
    /// Asset path of the click sound; silent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_sound: Option<String>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_messages: 8,
            message_lifetime_secs: 8.0,
            click_sound: None,
        }
    }
}

/// Access to the host's administrative override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideAccessConfig {
    /// Request an override token at startup
    pub enabled: bool,
    /// Name the token is issued under
    pub holder: String,
}

impl Default for OverrideAccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            holder: "inspiration-panel".to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Inspiration Panel Configuration

[window]
title = "Grant Inspirations to Colonists"
width = 900.0
height = 600.0
pause_game = false
show_close_button = true
toggle_key = "I"

[feedback]
max_messages = 8
message_lifetime_secs = 8.0
# click_sound = "sounds/click.ogg"

[override_access]
enabled = true
holder = "inspiration-panel"
"#
    .to_string()
}
