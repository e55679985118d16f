//! # Configuration
//!
//! Settings for a play session, read from a TOML file.
//!
//! ```toml
//! [game]
//! start_room = "Bridge"
//! show_banner = true
//! prompt = "[{room}]$ "
//!
//! [logging]
//! level = "info"
//! file = "derelict.log"
//! ```
//!
//! Every section and field is optional; anything missing takes its default.
//! A missing file is handled by the binary, which falls back to
//! [`Config::default`].

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::ship::START_ROOM;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Room the player wakes up in. Must name a room of the ship.
    #[serde(default = "default_start_room")]
    pub start_room: String,
    /// Print the welcome banner before the first prompt.
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
    /// Prompt template; `{room}` is replaced with the current room name.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_start_room() -> String {
    START_ROOM.to_string()
}

fn default_show_banner() -> bool {
    true
}

fn default_prompt() -> String {
    "[{room}]$ ".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: default_start_room(),
            show_banner: default_show_banner(),
            prompt: default_prompt(),
        }
    }
}

impl GameConfig {
    pub fn render_prompt(&self, room: &str) -> String {
        self.prompt.replace("{room}", room)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines to this file. Unset means stderr, and only on a TTY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unrecognised values fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to info", self.level);
                log::LevelFilter::Info
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        Self::parse(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the default configuration to `path`. An existing file is left alone.
    pub async fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if fs::try_exists(path).await.unwrap_or(false) {
            return Err(anyhow!("Config file {} already exists", path.display()));
        }

        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;
        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }
}
