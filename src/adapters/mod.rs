//! Adapters - Implementations of port interfaces.
//!
//! - `notification` - First-contact marker stores (in-memory)
//! - `currency` - ISO 4217 exponent table

pub mod currency;
pub mod notification;

pub use currency::StaticCurrencyTable;
pub use notification::InMemoryNotificationMarkerStore;
