//! Notification marker adapters.

mod in_memory_marker_store;

pub use in_memory_marker_store::InMemoryNotificationMarkerStore;
