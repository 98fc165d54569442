//! Payment status resolution.

mod lifecycle;
mod resolver;
mod status_code;

pub use lifecycle::PaymentLifecycleState;
pub use resolver::{resolve, resolve_parameters, STATUS_FIELD};
pub use status_code::PaymentStatusCode;
