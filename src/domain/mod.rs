//! Domain layer containing the signing and verification logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait)
//! - `parameters` - Case-insensitive parameter bag and scalar values
//! - `signing` - Canonical SHA digest over a parameter set
//! - `checkout` - Signing options and outbound request assembly
//! - `notification` - SHA-OUT verification and amount cross-check
//! - `status` - Provider status codes and the payment lifecycle

pub mod checkout;
pub mod foundation;
pub mod notification;
pub mod parameters;
pub mod signing;
pub mod status;
