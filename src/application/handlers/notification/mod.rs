//! Notification handlers.

mod handle_notification;

pub use handle_notification::{
    HandleNotificationCommand, HandleNotificationHandler, HandleNotificationResult,
    NotificationResponse, ACCEPTED_BODY,
};
