//! PostFinance Checkout - hosted payment page integration.
//!
//! Signs payment-initiation requests with the SHA-IN passphrase, verifies
//! return calls and notifications with the SHA-OUT passphrase, and maps
//! provider status codes onto a payment lifecycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
