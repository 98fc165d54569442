//! NotificationMarkerStore port - Interface for first-contact tracking.
//!
//! The provider's first notification for an order is rejected so that it is
//! redelivered once the payment is stored. This port remembers which orders
//! have already been contacted.
//!
//! ## Atomicity
//!
//! `mark_seen` is a compare-and-set: for concurrent calls with the same
//! order, exactly one receives `MarkResult::FirstContact`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::DomainError;
use crate::domain::notification::NotificationAttempt;

/// Outcome of marking an order as contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkResult {
    /// The marker was not set before this call.
    FirstContact,
    /// The marker was already set.
    AlreadySeen,
}

impl From<MarkResult> for NotificationAttempt {
    fn from(result: MarkResult) -> Self {
        match result {
            MarkResult::FirstContact => NotificationAttempt::FirstContact,
            MarkResult::AlreadySeen => NotificationAttempt::Redelivery,
        }
    }
}

/// Port for the per-order first-contact marker.
///
/// # Example
///
/// ```ignore
/// let attempt: NotificationAttempt = store.mark_seen(&order_id).await?.into();
/// verifier.verify_attempt(attempt, &inbound, expected, exponent)?;
/// ```
#[async_trait]
pub trait NotificationMarkerStore: Send + Sync {
    /// Sets the marker for an order and reports whether it was already set.
    async fn mark_seen(&self, order_id: &str) -> Result<MarkResult, DomainError>;

    /// Returns true if the marker for the order is set.
    async fn is_seen(&self, order_id: &str) -> Result<bool, DomainError>;

    /// Removes markers set before the given time.
    ///
    /// Returns the number of markers removed.
    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
