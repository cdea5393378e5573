use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use prd_studio_config::{
    PRD_STUDIO_GENERATION_DELAY_MS, PRD_STUDIO_LOG, PRD_STUDIO_OUTPUT_DIR,
};
use prd_studio_core::DEFAULT_OUTPUT_DIR;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid generation delay: {0}")]
    InvalidDelay(#[from] ParseIntError),
    #[error("Output directory must not be empty")]
    EmptyOutputDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where downloads are written
    pub output_dir: PathBuf,
    /// Cosmetic pause before a document is generated
    pub generation_delay: Duration,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            generation_delay: Duration::ZERO,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = match lookup(PRD_STUDIO_OUTPUT_DIR) {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyOutputDir),
            Some(dir) => PathBuf::from(dir.trim()),
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };

        let generation_delay = match lookup(PRD_STUDIO_GENERATION_DELAY_MS) {
            Some(ms) => Duration::from_millis(ms.trim().parse::<u64>()?),
            None => Duration::ZERO,
        };

        let log_filter = lookup(PRD_STUDIO_LOG).filter(|f| !f.trim().is_empty());

        Ok(Config {
            output_dir,
            generation_delay,
            log_filter,
        })
    }
}
