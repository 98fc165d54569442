//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod checkout;
mod inbound;
pub mod notification;
pub mod status;

pub use checkout::{
    CaptureToken, HandleReturnCommand, HandleReturnHandler, HandleReturnResult, OffSiteRedirect,
    PrepareCheckoutCommand, PrepareCheckoutHandler, PrepareCheckoutResult,
};
pub use notification::{
    HandleNotificationCommand, HandleNotificationHandler, HandleNotificationResult,
    NotificationResponse,
};
pub use status::{GetPaymentStatusHandler, GetPaymentStatusQuery, GetPaymentStatusResult};
