//! Ports (interfaces) for external collaborators.
//!
//! Ports define the contracts the application handlers depend on.
//! Adapters implement these traits.
//!
//! # Notification
//!
//! - `NotificationMarkerStore` - Atomic first-contact marker per order
//!
//! # Reference data
//!
//! - `CurrencyExponentLookup` - Minor-unit exponent per currency

mod currency_exponents;
mod notification_marker_store;

pub use currency_exponents::CurrencyExponentLookup;
pub use notification_marker_store::{MarkResult, NotificationMarkerStore};
