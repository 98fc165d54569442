//! Immutable gateway signing options.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::parameters::{ParameterBag, ParameterValue};
use crate::domain::signing::HashAlgorithm;

use super::{ConfigurationError, GatewayEnvironment};

/// Everything needed to sign requests and verify responses for one merchant.
///
/// Constructed once at startup through [`SigningOptions::builder`]; there is
/// no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct SigningOptions {
    hashing_method: HashAlgorithm,
    sha_in_passphrase: SecretString,
    sha_out_passphrase: SecretString,
    pspid: String,
    environment: GatewayEnvironment,
    optional_parameters: ParameterBag,
}

impl SigningOptions {
    pub fn builder() -> SigningOptionsBuilder {
        SigningOptionsBuilder::default()
    }

    pub fn hashing_method(&self) -> HashAlgorithm {
        self.hashing_method
    }

    /// Merchant identifier (PSPID).
    pub fn pspid(&self) -> &str {
        &self.pspid
    }

    pub fn environment(&self) -> GatewayEnvironment {
        self.environment
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment.is_sandbox()
    }

    /// URL of the hosted payment page selected by the sandbox flag.
    pub fn offsite_url(&self) -> &'static str {
        self.environment.offsite_url()
    }

    /// Defaults merged underneath every outgoing request.
    pub fn optional_parameters(&self) -> &ParameterBag {
        &self.optional_parameters
    }

    pub(crate) fn sha_in_passphrase(&self) -> &str {
        self.sha_in_passphrase.expose_secret()
    }

    pub(crate) fn sha_out_passphrase(&self) -> &str {
        self.sha_out_passphrase.expose_secret()
    }
}

/// Builder for [`SigningOptions`].
#[derive(Debug, Default)]
pub struct SigningOptionsBuilder {
    hashing_method: Option<String>,
    sha_in_passphrase: Option<SecretString>,
    sha_out_passphrase: Option<SecretString>,
    pspid: Option<String>,
    sandbox: Option<bool>,
    optional_parameters: ParameterBag,
}

impl SigningOptionsBuilder {
    /// Hash algorithm name; defaults to `sha512`.
    pub fn hashing_method(mut self, name: impl Into<String>) -> Self {
        self.hashing_method = Some(name.into());
        self
    }

    /// Passphrase for outgoing requests (SHA-IN).
    pub fn sha_in_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.sha_in_passphrase = Some(SecretString::new(passphrase.into()));
        self
    }

    /// Passphrase for notifications and return calls (SHA-OUT).
    pub fn sha_out_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.sha_out_passphrase = Some(SecretString::new(passphrase.into()));
        self
    }

    pub fn pspid(mut self, pspid: impl Into<String>) -> Self {
        self.pspid = Some(pspid.into());
        self
    }

    /// Selects the test (`true`) or production (`false`) payment page.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Adds a default parameter sent with every request unless overridden.
    pub fn optional_parameter(
        mut self,
        key: impl AsRef<str>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.optional_parameters.insert(key, value);
        self
    }

    /// Replaces all default parameters.
    pub fn optional_parameters(mut self, parameters: ParameterBag) -> Self {
        self.optional_parameters = parameters;
        self
    }

    /// Validates and freezes the options.
    ///
    /// # Errors
    ///
    /// - `MissingRequired` if a passphrase or the PSPID is empty
    /// - `SandboxNotSet` if the sandbox flag was never given
    /// - `UnsupportedHashAlgorithm` for an unknown hashing method
    pub fn build(self) -> Result<SigningOptions, ConfigurationError> {
        let sha_in_passphrase = require_secret(self.sha_in_passphrase, "shaInPassphrase")?;
        let sha_out_passphrase = require_secret(self.sha_out_passphrase, "shaOutPassphrase")?;

        let pspid = self
            .pspid
            .filter(|pspid| !pspid.trim().is_empty())
            .ok_or(ConfigurationError::MissingRequired("pspid"))?;

        let sandbox = self.sandbox.ok_or(ConfigurationError::SandboxNotSet)?;

        let hashing_method = match self.hashing_method {
            Some(name) => name.parse()?,
            None => HashAlgorithm::default(),
        };

        Ok(SigningOptions {
            hashing_method,
            sha_in_passphrase,
            sha_out_passphrase,
            pspid,
            environment: GatewayEnvironment::from_sandbox(sandbox),
            optional_parameters: self.optional_parameters,
        })
    }
}

fn require_secret(
    secret: Option<SecretString>,
    name: &'static str,
) -> Result<SecretString, ConfigurationError> {
    secret
        .filter(|secret| !secret.expose_secret().is_empty())
        .ok_or(ConfigurationError::MissingRequired(name))
}

#[cfg(test)]
pub(crate) fn test_options() -> SigningOptions {
    SigningOptions::builder()
        .sha_in_passphrase("in-secret-passphrase")
        .sha_out_passphrase("out-secret-passphrase")
        .pspid("TESTPSPID")
        .sandbox(true)
        .build()
        .unwrap()
}
