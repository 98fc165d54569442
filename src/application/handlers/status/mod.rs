//! Status query handlers.

mod get_payment_status;

pub use get_payment_status::{
    GetPaymentStatusHandler, GetPaymentStatusQuery, GetPaymentStatusResult,
};
