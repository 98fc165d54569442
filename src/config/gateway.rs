//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::checkout::{ConfigurationError, SigningOptions};
use crate::domain::parameters::ParameterBag;

/// Gateway configuration (PostFinance hosted payment page)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Digest algorithm name, e.g. `sha512`
    #[serde(default = "default_hashing_method")]
    pub hashing_method: String,

    /// Passphrase for outgoing requests
    #[serde(default)]
    pub sha_in_passphrase: Option<SecretString>,

    /// Passphrase for return calls and notifications
    #[serde(default)]
    pub sha_out_passphrase: Option<SecretString>,

    /// Merchant identifier
    #[serde(default)]
    pub pspid: String,

    /// Use the test payment page; must be set explicitly
    #[serde(default)]
    pub sandbox: Option<bool>,

    /// Parameters sent with every request unless overridden
    #[serde(default)]
    pub optional_parameters: BTreeMap<String, String>,
}

fn default_hashing_method() -> String {
    "sha512".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            hashing_method: default_hashing_method(),
            sha_in_passphrase: None,
            sha_out_passphrase: None,
            pspid: String::new(),
            sandbox: None,
            optional_parameters: BTreeMap::new(),
        }
    }
}

impl GatewayConfig {
    /// Builds validated signing options
    pub fn signing_options(&self) -> Result<SigningOptions, ConfigurationError> {
        let mut builder = SigningOptions::builder()
            .hashing_method(self.hashing_method.as_str())
            .pspid(self.pspid.as_str())
            .optional_parameters(
                self.optional_parameters
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect::<ParameterBag>(),
            );

        if let Some(passphrase) = &self.sha_in_passphrase {
            builder = builder.sha_in_passphrase(passphrase.expose_secret().as_str());
        }
        if let Some(passphrase) = &self.sha_out_passphrase {
            builder = builder.sha_out_passphrase(passphrase.expose_secret().as_str());
        }
        if let Some(sandbox) = self.sandbox {
            builder = builder.sandbox(sandbox);
        }

        builder.build()
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.signing_options().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::GatewayEnvironment;
    use crate::domain::signing::HashAlgorithm;

    fn complete() -> GatewayConfig {
        GatewayConfig {
            sha_in_passphrase: Some(SecretString::new("in".to_string())),
            sha_out_passphrase: Some(SecretString::new("out".to_string())),
            pspid: "MERCHANT".to_string(),
            sandbox: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_config_is_valid() {
        let options = complete().signing_options().unwrap();

        assert_eq!(options.pspid(), "MERCHANT");
        assert_eq!(options.environment(), GatewayEnvironment::Production);
        assert_eq!(options.hashing_method(), HashAlgorithm::Sha512);
    }

    #[test]
    fn test_missing_passphrase() {
        let config = GatewayConfig {
            sha_out_passphrase: None,
            ..complete()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingRequired("shaOutPassphrase"))
        );
    }

    #[test]
    fn test_missing_sandbox() {
        let config = GatewayConfig {
            sandbox: None,
            ..complete()
        };

        assert_eq!(config.validate(), Err(ConfigurationError::SandboxNotSet));
    }

    #[test]
    fn test_unsupported_hashing_method() {
        let config = GatewayConfig {
            hashing_method: "md5".to_string(),
            ..complete()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::UnsupportedHashAlgorithm("md5".to_string()))
        );
    }

    #[test]
    fn test_optional_parameters_are_normalized() {
        let mut config = complete();
        config
            .optional_parameters
            .insert("language".to_string(), "de_CH".to_string());

        let options = config.signing_options().unwrap();

        assert_eq!(
            options.optional_parameters().get_str("LANGUAGE"),
            Some("de_CH".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_passphrases() {
        let debug = format!("{:?}", complete());
        assert!(!debug.contains("\"in\""));
        assert!(debug.contains("REDACTED"));
    }
}
