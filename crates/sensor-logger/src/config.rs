//! Sensor logger configuration

use crate::error::LoggerError;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

/// Prefix for environment overrides, e.g. `SENSOR_LOGGER_PRODUCERS=4`
const ENV_PREFIX: &str = "SENSOR_LOGGER";

/// What a producer does when the buffer has no free slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFull {
    /// Discard the sample and move on
    #[default]
    Drop,
    /// Yield and try the same sample again
    Retry,
}

/// Sensor logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Number of producer threads (default: 3)
    pub producers: usize,
    /// Samples each producer generates before stopping
    pub samples_per_producer: u32,
    /// Delay between two samples of one producer (milliseconds, 0 = none)
    pub sample_interval_ms: u64,
    /// Full-buffer policy
    pub on_full: OnFull,
    /// Maximum tracing level: trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            producers: 3,
            samples_per_producer: 100,
            sample_interval_ms: 0,
            on_full: OnFull::Drop,
            log_level: "info".to_string(),
        }
    }
}

impl LoggerConfig {
    /// Load defaults, then the optional file, then `SENSOR_LOGGER_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, LoggerError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.producers == 0 {
            return Err(LoggerError::InvalidConfig(
                "producers must be at least 1".to_string(),
            ));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed tracing level
    pub fn level(&self) -> Result<Level, LoggerError> {
        Level::from_str(&self.log_level).map_err(|_| {
            LoggerError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }
}
