//! Sensor Logger Error Types

use thiserror::Error;

/// Errors raised while configuring or running the logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Global tracing subscriber was already installed
    #[error("Failed to install tracing subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// A producer or consumer thread panicked
    #[error("{0} thread panicked")]
    WorkerPanicked(&'static str),
}
