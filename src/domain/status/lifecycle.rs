//! Payment lifecycle state machine.
//!
//! The merchant-facing view of a payment, derived from the provider status.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentLifecycleState {
    /// No status reported yet.
    New,

    /// Funds reserved, not yet collected.
    Authorized,

    /// Payment requested or processed.
    Captured,

    /// Incomplete, refused or invalid.
    Failed,

    Refunded,

    /// Cancelled by the payer or deleted.
    Canceled,

    /// Status the merchant cannot act on automatically.
    Unknown,
}

impl PaymentLifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentLifecycleState::New => "new",
            PaymentLifecycleState::Authorized => "authorized",
            PaymentLifecycleState::Captured => "captured",
            PaymentLifecycleState::Failed => "failed",
            PaymentLifecycleState::Refunded => "refunded",
            PaymentLifecycleState::Canceled => "canceled",
            PaymentLifecycleState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for PaymentLifecycleState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentLifecycleState::*;
        match self {
            New => vec![Authorized, Captured, Failed, Canceled, Unknown],
            Authorized => vec![Captured, Failed, Canceled, Unknown],
            Unknown => vec![Authorized, Captured, Failed, Refunded, Canceled],
            Captured | Failed | Refunded | Canceled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_can_move_to_authorized() {
        let state = PaymentLifecycleState::New;
        assert_eq!(
            state.transition_to(PaymentLifecycleState::Authorized),
            Ok(PaymentLifecycleState::Authorized)
        );
    }

    #[test]
    fn authorized_can_be_captured() {
        assert!(PaymentLifecycleState::Authorized.can_transition_to(&PaymentLifecycleState::Captured));
    }

    #[test]
    fn authorized_cannot_go_back_to_new() {
        let result = PaymentLifecycleState::Authorized.transition_to(PaymentLifecycleState::New);
        assert!(result.is_err());
    }

    #[test]
    fn settled_states_are_terminal() {
        for state in [
            PaymentLifecycleState::Captured,
            PaymentLifecycleState::Failed,
            PaymentLifecycleState::Refunded,
            PaymentLifecycleState::Canceled,
        ] {
            assert!(state.is_terminal(), "{state} should be terminal");
        }
    }

    #[test]
    fn open_states_are_not_terminal() {
        for state in [
            PaymentLifecycleState::New,
            PaymentLifecycleState::Authorized,
            PaymentLifecycleState::Unknown,
        ] {
            assert!(!state.is_terminal(), "{state} should not be terminal");
        }
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PaymentLifecycleState::Captured).unwrap();
        assert_eq!(json, "\"captured\"");
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(PaymentLifecycleState::Canceled.to_string(), "canceled");
    }
}
