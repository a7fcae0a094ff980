//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] by reading an [`EngineConfig`] from a JSON
//! document.  Missing fields fall back to their defaults, so a file may
//! override only what it cares about.

use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::EngineConfig;
use crate::error::Error;

pub struct JsonFileConfig {
    path: PathBuf,
}

impl JsonFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate a JSON document.
    pub fn parse(text: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text).map_err(|e| {
            warn!("Config: parse error: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate().map_err(|e| match e {
            Error::InvalidConfiguration(msg) => ConfigError::ValidationFailed(msg),
            _ => ConfigError::ValidationFailed("invalid configuration"),
        })?;
        Ok(config)
    }
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<EngineConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound);
            }
            Err(e) => {
                warn!("Config: cannot read {}: {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };
        let config = Self::parse(&text)?;
        info!("Config: loaded {}", self.path.display());
        Ok(config)
    }
}
