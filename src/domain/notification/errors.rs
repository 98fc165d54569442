//! Notification verification errors.
//!
//! Every failure maps to an HTTP status code and a generic public body, so
//! the caller can answer the provider without revealing which check failed.

use http::StatusCode;
use thiserror::Error;

/// Public body for every rejected notification.
pub const INVALID_NOTIFICATION_BODY: &str = "The notification is invalid.";
/// Public body for a notification that arrived before the payment was ready.
pub const EARLY_STATE_BODY: &str = "NOTIFICATION_EARLY_STATE";
/// Public body for internal failures.
pub const INTERNAL_ERROR_BODY: &str = "Internal error.";

/// Errors that occur while verifying a return call or notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// `SHASIGN` is absent or empty.
    #[error("Missing signature")]
    MissingSignature,

    /// Recomputed SHA-OUT digest does not match the supplied one.
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Reported amount does not match the stored one.
    #[error("Amount mismatch: expected {expected}, got {}", display_actual(.actual))]
    AmountMismatch {
        expected: i64,
        actual: Option<i64>,
    },

    /// First notification for an order; the provider will redeliver.
    #[error("Notification arrived before the payment was ready")]
    PrematureNotification,

    /// Required field missing from the inbound or stored parameters.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Currency code without a known minor-unit exponent.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Marker or lookup storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

fn display_actual(actual: &Option<i64>) -> String {
    actual.map_or_else(|| "nothing".to_string(), |value| value.to_string())
}

impl VerificationError {
    /// Returns true if the provider should deliver the notification again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VerificationError::PrematureNotification | VerificationError::Storage(_)
        )
    }

    /// Maps the error to the HTTP status answered to the provider.
    ///
    /// - 4xx: rejected, no retry
    /// - 5xx: temporary, the provider retries
    pub fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::MissingSignature
            | VerificationError::SignatureMismatch
            | VerificationError::AmountMismatch { .. }
            | VerificationError::MissingField(_)
            | VerificationError::UnknownCurrency(_) => StatusCode::BAD_REQUEST,

            VerificationError::PrematureNotification | VerificationError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Body safe to send back to the provider.
    pub fn public_message(&self) -> &'static str {
        match self {
            VerificationError::PrematureNotification => EARLY_STATE_BODY,
            VerificationError::Storage(_) => INTERNAL_ERROR_BODY,
            _ => INVALID_NOTIFICATION_BODY,
        }
    }
}
