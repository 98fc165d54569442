//! Verification of inbound return calls and notifications.

mod amount;
mod errors;
mod verifier;

pub use amount::{parse_major_units, reported_minor_units, to_minor_units};
pub use errors::{
    VerificationError, EARLY_STATE_BODY, INTERNAL_ERROR_BODY, INVALID_NOTIFICATION_BODY,
};
pub use verifier::{NotificationAttempt, NotificationVerifier, VerifiedNotification, AMOUNT_FIELD};
