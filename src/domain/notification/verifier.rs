//! SHA-OUT verification of return calls and notifications.

use subtle::ConstantTimeEq;

use crate::domain::checkout::SigningOptions;
use crate::domain::parameters::ParameterBag;
use crate::domain::signing::{sign, SHA_OUT_PARAMETERS, SIGNATURE_FIELD};

use super::amount::reported_minor_units;
use super::VerificationError;

/// Field carrying the amount in major units.
pub const AMOUNT_FIELD: &str = "AMOUNT";

/// Whether this is the first time the provider contacted us for an order.
///
/// Produced by the caller's compare-and-set marker, never guessed by the
/// verifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAttempt {
    FirstContact,
    Redelivery,
}

/// Inbound parameters that passed signature and amount checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedNotification {
    parameters: ParameterBag,
    amount_minor_units: i64,
}

impl VerifiedNotification {
    /// The full inbound parameter set, including fields outside the
    /// signed subset.
    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    pub fn amount_minor_units(&self) -> i64 {
        self.amount_minor_units
    }

    pub fn into_parameters(self) -> ParameterBag {
        self.parameters
    }
}

/// Verifies inbound parameter sets against the SHA-OUT passphrase.
#[derive(Debug, Clone, Copy)]
pub struct NotificationVerifier<'a> {
    options: &'a SigningOptions,
}

impl<'a> NotificationVerifier<'a> {
    pub fn new(options: &'a SigningOptions) -> Self {
        Self { options }
    }

    /// Verifies signature and amount.
    ///
    /// # Verification Steps
    ///
    /// 1. Require a non-empty `SHASIGN`
    /// 2. Restrict the inbound set to the SHA-OUT allowlist
    /// 3. Recompute the digest with the SHA-OUT passphrase
    /// 4. Compare against the supplied signature (constant-time)
    /// 5. Cross-check the amount in minor units
    ///
    /// # Errors
    ///
    /// - `MissingSignature` - `SHASIGN` absent or empty
    /// - `SignatureMismatch` - digest differs
    /// - `AmountMismatch` - amount differs, is missing or unparseable
    pub fn verify(
        &self,
        inbound: &ParameterBag,
        expected_minor_units: i64,
        currency_exponent: u32,
    ) -> Result<VerifiedNotification, VerificationError> {
        let supplied = inbound
            .get_non_empty(SIGNATURE_FIELD)
            .ok_or(VerificationError::MissingSignature)?;

        let signed = inbound.subset(SHA_OUT_PARAMETERS.iter().copied());
        let expected = sign(
            &signed,
            self.options.sha_out_passphrase(),
            self.options.hashing_method(),
        );

        if !constant_time_compare(expected.as_bytes(), supplied.to_uppercase().as_bytes()) {
            return Err(VerificationError::SignatureMismatch);
        }

        let actual = inbound
            .get(AMOUNT_FIELD)
            .and_then(|value| reported_minor_units(value, currency_exponent));
        if actual != Some(expected_minor_units) {
            return Err(VerificationError::AmountMismatch {
                expected: expected_minor_units,
                actual,
            });
        }

        Ok(VerifiedNotification {
            parameters: inbound.clone(),
            amount_minor_units: expected_minor_units,
        })
    }

    /// Verifies an asynchronous notification.
    ///
    /// The first contact for an order is always rejected before any other
    /// check so that the provider redelivers once the payment is stored.
    pub fn verify_attempt(
        &self,
        attempt: NotificationAttempt,
        inbound: &ParameterBag,
        expected_minor_units: i64,
        currency_exponent: u32,
    ) -> Result<VerifiedNotification, VerificationError> {
        if attempt == NotificationAttempt::FirstContact {
            return Err(VerificationError::PrematureNotification);
        }
        self.verify(inbound, expected_minor_units, currency_exponent)
    }
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
