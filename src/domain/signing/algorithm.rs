//! Hash algorithms accepted for SHA-IN / SHA-OUT signatures.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

use crate::domain::checkout::ConfigurationError;

/// SHA-2 variant used to digest the signing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    #[default]
    Sha512,
}

impl HashAlgorithm {
    /// Canonical lower-case name, as configured in the provider back office.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digests `input` and returns the upper-case hex encoding.
    pub fn digest_hex_upper(&self, input: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha256 => hex::encode_upper(Sha256::digest(input)),
            HashAlgorithm::Sha384 => hex::encode_upper(Sha384::digest(input)),
            HashAlgorithm::Sha512 => hex::encode_upper(Sha512::digest(input)),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ConfigurationError;

    /// Accepts `sha512`, `SHA512`, `sha-512` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(ConfigurationError::UnsupportedHashAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
