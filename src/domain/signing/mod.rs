//! Signing engine for SHA-IN and SHA-OUT signatures.
//!
//! - `algorithm` - Supported SHA-2 variants
//! - `natural_order` - Locale-independent key ordering
//! - `allowlist` - Parameters covered by SHA-OUT
//! - `signer` - Signing string construction and digest

mod algorithm;
mod allowlist;
pub mod natural_order;
mod signer;

pub use algorithm::HashAlgorithm;
pub use allowlist::{is_sha_out_parameter, SHA_OUT_PARAMETERS, SIGNATURE_FIELD};
pub use signer::{sign, signing_string, CanonicalSigner};
