//! # Configuration Management Module
//!
//! Settings for the `textquest` binary, stored as TOML.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! world_file = "data/world.json"
//! catalog_file = "data/messages.json"
//! prompt = "> "
//! banner = true
//!
//! [logging]
//! level = "warn"
//! file = "textquest.log"
//! ```
//!
//! Leaving `world_file` or `catalog_file` unset selects the bundled sample
//! world and the default Russian catalog.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use textquest::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("textquest.toml")?;
//!     let world = config.load_world()?;
//!     println!("{} locations", world.locations.len());
//!     Ok(())
//! }
//! ```

use std::fs;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::quest::{self, MessageCatalog, WorldDefinition};

/// Default config file name used by the binary.
pub const DEFAULT_CONFIG_PATH: &str = "textquest.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// World definition JSON; the bundled world when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_file: Option<String>,
    /// Message catalog JSON; the default catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<String>,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the opening look when `play` starts.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_banner() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_file: None,
            catalog_file: None,
            prompt: default_prompt(),
            banner: default_banner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `Warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// World definition named by `[game] world_file`, or the bundled world.
    pub fn load_world(&self) -> Result<WorldDefinition> {
        match self.game.world_file.as_deref() {
            Some(path) => quest::load_world_from_json(path)
                .map_err(|e| anyhow!("Failed to load world {}: {}", path, e)),
            None => Ok(quest::canonical_world()),
        }
    }

    /// Message catalog named by `[game] catalog_file`, or the default catalog.
    pub fn load_catalog(&self) -> Result<MessageCatalog> {
        match self.game.catalog_file.as_deref() {
            Some(path) => quest::load_catalog_from_json(path)
                .map_err(|e| anyhow!("Failed to load message catalog {}: {}", path, e)),
            None => Ok(MessageCatalog::default()),
        }
    }
}
