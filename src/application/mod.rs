//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change stored payment details; the status query only reads them.

pub mod handlers;

pub use handlers::{
    // Checkout
    CaptureToken, OffSiteRedirect, PrepareCheckoutCommand, PrepareCheckoutHandler,
    PrepareCheckoutResult,
    // Return and notification
    HandleNotificationCommand, HandleNotificationHandler, HandleNotificationResult,
    HandleReturnCommand, HandleReturnHandler, HandleReturnResult, NotificationResponse,
    // Status
    GetPaymentStatusHandler, GetPaymentStatusQuery, GetPaymentStatusResult,
};
