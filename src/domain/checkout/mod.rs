//! Outgoing checkout: options, payment conversion and request signing.
//!
//! # Module Structure
//!
//! - `options` - Immutable signing options and their builder
//! - `environment` - Test / production hosted page selection
//! - `payment` - Merchant payment to request parameters
//! - `extra_data` - Callback tokens in `COMPLUS`
//! - `request_builder` - Merge, filter, sign

mod environment;
mod errors;
mod extra_data;
pub(crate) mod options;
mod payment;
mod request_builder;

pub use environment::GatewayEnvironment;
pub use errors::{CheckoutError, ConfigurationError};
pub use extra_data::{CallbackExtraData, EXTRA_DATA_FIELD};
pub use options::{SigningOptions, SigningOptionsBuilder};
pub use payment::Payment;
pub use request_builder::{
    build, RequestBuilder, ACCEPT_URL_FIELD, CANCEL_URL_FIELD, MERCHANT_ID_FIELD,
};
