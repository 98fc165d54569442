//! Canonical SHA signature over a parameter bag.
//!
//! The signing string is every non-empty parameter, sorted in natural
//! case-insensitive key order, rendered as `KEY=VALUE<passphrase>` and
//! concatenated without separators. The digest of that string, upper-case
//! hex, is the signature.

use crate::domain::parameters::ParameterBag;

use super::allowlist::SIGNATURE_FIELD;
use super::natural_order;
use super::HashAlgorithm;

/// Builds the string that is fed to the hash function.
pub fn signing_string(parameters: &ParameterBag, passphrase: &str) -> String {
    let mut entries: Vec<(&str, String)> = parameters
        .iter()
        .filter(|(key, _)| key.as_str() != SIGNATURE_FIELD)
        .map(|(key, value)| (key.as_str(), value.canonical().into_owned()))
        .filter(|(_, value)| !value.is_empty())
        .collect();

    entries.sort_by(|(a, _), (b, _)| natural_order::compare(a, b));

    entries
        .into_iter()
        .map(|(key, value)| format!("{}={}{}", key, value, passphrase))
        .collect()
}

/// Signs `parameters` with `passphrase` using `algorithm`.
///
/// Pure and deterministic: the same inputs always produce the same digest.
pub fn sign(parameters: &ParameterBag, passphrase: &str, algorithm: HashAlgorithm) -> String {
    algorithm.digest_hex_upper(signing_string(parameters, passphrase).as_bytes())
}

/// Signer bound to one hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanonicalSigner {
    algorithm: HashAlgorithm,
}

impl CanonicalSigner {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Signs `parameters` with `passphrase`.
    pub fn sign(&self, parameters: &ParameterBag, passphrase: &str) -> String {
        sign(parameters, passphrase, self.algorithm)
    }
}
