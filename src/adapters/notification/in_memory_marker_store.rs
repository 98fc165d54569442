//! In-memory notification marker store.
//!
//! Suitable for tests and single-process deployments. Markers are lost on
//! restart, which only means one extra rejected first notification per
//! order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{MarkResult, NotificationMarkerStore};

/// In-memory implementation of the `NotificationMarkerStore` port.
///
/// Check-and-insert happens under a single write lock, so concurrent
/// `mark_seen` calls for one order observe exactly one `FirstContact`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationMarkerStore {
    markers: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl InMemoryNotificationMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders currently marked.
    pub async fn len(&self) -> usize {
        self.markers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.markers.read().await.is_empty()
    }

    /// Sets a marker with an explicit timestamp.
    ///
    /// Useful for exercising retention in tests.
    pub async fn insert_at(&self, order_id: impl Into<String>, seen_at: DateTime<Utc>) {
        self.markers.write().await.insert(order_id.into(), seen_at);
    }
}

#[async_trait]
impl NotificationMarkerStore for InMemoryNotificationMarkerStore {
    async fn mark_seen(&self, order_id: &str) -> Result<MarkResult, DomainError> {
        let mut markers = self.markers.write().await;
        let result = match markers.entry(order_id.to_string()) {
            Entry::Occupied(_) => MarkResult::AlreadySeen,
            Entry::Vacant(slot) => {
                slot.insert(Utc::now());
                MarkResult::FirstContact
            }
        };
        tracing::debug!(order_id, ?result, "Notification marker checked");
        Ok(result)
    }

    async fn is_seen(&self, order_id: &str) -> Result<bool, DomainError> {
        Ok(self.markers.read().await.contains_key(order_id))
    }

    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut markers = self.markers.write().await;
        let before = markers.len();
        markers.retain(|_, seen_at| *seen_at >= cutoff);
        let removed = (before - markers.len()) as u64;
        if removed > 0 {
            tracing::info!(removed, "Expired notification markers removed");
        }
        Ok(removed)
    }
}
