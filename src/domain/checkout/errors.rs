//! Checkout error types.

use thiserror::Error;

/// Invalid or missing gateway configuration.
///
/// Raised while constructing [`SigningOptions`](super::SigningOptions); fatal,
/// nothing should be signed or verified with a half-configured gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Required option missing: {0}")]
    MissingRequired(&'static str),

    #[error("The boolean sandbox option must be set")]
    SandboxNotSet,

    #[error("Unsupported hashing method: {0}")]
    UnsupportedHashAlgorithm(String),
}

/// Errors raised while preparing an off-site checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The stored `COMPLUS` field is not a JSON object.
    #[error("Invalid extra data: {0}")]
    InvalidExtraData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_the_option() {
        let err = ConfigurationError::MissingRequired("pspid");
        assert_eq!(err.to_string(), "Required option missing: pspid");
    }

    #[test]
    fn sandbox_not_set_displays_correctly() {
        assert_eq!(
            ConfigurationError::SandboxNotSet.to_string(),
            "The boolean sandbox option must be set"
        );
    }
}
