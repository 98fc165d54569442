//! Provider status to lifecycle state mapping.

use crate::domain::parameters::ParameterBag;

use super::{PaymentLifecycleState, PaymentStatusCode};

/// Field carrying the provider status code.
pub const STATUS_FIELD: &str = "STATUS";

/// Maps a provider status code to a lifecycle state.
///
/// Total: absent codes are `New`, codes outside the mapped groups are
/// `Unknown`.
pub fn resolve(status_code: Option<i64>) -> PaymentLifecycleState {
    let Some(code) = status_code else {
        return PaymentLifecycleState::New;
    };

    use PaymentStatusCode::*;
    match PaymentStatusCode::from_code(code) {
        Some(Authorised) => PaymentLifecycleState::Authorized,
        Some(PaymentRequested | Payment | AuthorisationCancellationWaiting) => {
            PaymentLifecycleState::Captured
        }
        Some(IncompleteOrInvalid | AuthorisationRefused | PaymentRefused) => {
            PaymentLifecycleState::Failed
        }
        Some(Refund) => PaymentLifecycleState::Refunded,
        Some(CancelledByClient | PaymentDeleted) => PaymentLifecycleState::Canceled,
        _ => PaymentLifecycleState::Unknown,
    }
}

/// Resolves the state from stored or inbound details.
///
/// An absent, null or empty `STATUS` is `New`; a non-numeric one is
/// `Unknown`.
pub fn resolve_parameters(details: &ParameterBag) -> PaymentLifecycleState {
    match details.get(STATUS_FIELD) {
        Some(value) if !value.is_empty() => match value.as_integer() {
            Some(code) => resolve(Some(code)),
            None => PaymentLifecycleState::Unknown,
        },
        _ => resolve(None),
    }
}
