//! Configuration error types

use thiserror::Error;

use crate::domain::checkout::ConfigurationError;

/// Errors that can occur while loading configuration or installing telemetry
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid gateway configuration: {0}")]
    Invalid(#[from] ConfigurationError),

    #[error("Telemetry setup failed: {0}")]
    Telemetry(String),
}
