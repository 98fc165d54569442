//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `POSTFINANCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use postfinance_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.telemetry.init().expect("Failed to install subscriber");
//! let options = config.signing_options().expect("Invalid gateway configuration");
//!
//! println!("Redirecting to {}", options.offsite_url());
//! ```

mod error;
mod gateway;
mod telemetry;

pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::checkout::SigningOptions;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "POSTFINANCE";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables,
/// or [`AppConfig::load_from_file()`] to layer a file underneath them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gateway configuration (passphrases, PSPID, sandbox)
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `POSTFINANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `POSTFINANCE__GATEWAY__PSPID=MyPSPID` -> `gateway.pspid = MyPSPID`
    /// - `POSTFINANCE__GATEWAY__SANDBOX=true` -> `gateway.sandbox = true`
    /// - `POSTFINANCE__GATEWAY__OPTIONAL_PARAMETERS__LANGUAGE=en_US`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, overridden by environment variables
    ///
    /// The format (TOML, YAML, JSON) follows the file extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for missing passphrases or PSPID, an
    /// unset sandbox flag, or an unsupported hashing method.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.telemetry.env_filter()?;
        Ok(())
    }

    /// Builds the signing options used by the handlers
    pub fn signing_options(&self) -> Result<SigningOptions, ConfigError> {
        Ok(self.gateway.signing_options()?)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}
