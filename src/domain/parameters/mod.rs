//! Parameter bags exchanged with the hosted payment page.
//!
//! - `value` - Scalar values and their canonical string form
//! - `bag` - Case-insensitive name → value mapping

mod bag;
mod value;

pub use bag::{normalize_key, ParameterBag};
pub use value::ParameterValue;
