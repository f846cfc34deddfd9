use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::import::ImportConfig;
use self::log::LogConfig;
use self::server::ServerConfig;

pub mod import;
pub mod log;
pub mod server;

fn default_recent_capacity() -> usize {
    100
}

fn default_seed_sample_data() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub import: ImportConfig,
    pub log: LogConfig,

    /// How many additions the recent-additions log keeps
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
    /// Load the built-in phrase list at start-up
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            import: ImportConfig::default(),
            log: LogConfig::default(),
            recent_capacity: default_recent_capacity(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl Config {
    /// Defaults overridden by `LEXI_*` environment variables
    pub fn new() -> Self {
        let recent_capacity = env::var("LEXI_RECENT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_recent_capacity);

        let seed_sample_data = env::var("LEXI_SEED_SAMPLE_DATA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_seed_sample_data);

        Config {
            server: ServerConfig::new(),
            import: ImportConfig::new(),
            log: LogConfig::new(),

            recent_capacity,
            seed_sample_data,
        }
    }

    /// Reads a JSON config file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}
