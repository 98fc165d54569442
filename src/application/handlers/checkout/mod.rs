//! Checkout handlers.

mod handle_return;
mod prepare_checkout;

pub use handle_return::{
    HandleReturnCommand, HandleReturnHandler, HandleReturnResult, PAYID_FIELD,
};
pub use prepare_checkout::{
    CaptureToken, OffSiteRedirect, PrepareCheckoutCommand, PrepareCheckoutHandler,
    PrepareCheckoutResult, PARAMVAR_FIELD,
};
