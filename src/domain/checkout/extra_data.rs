//! Callback tokens carried through the `COMPLUS` field.
//!
//! The provider echoes `COMPLUS` back unchanged, which lets the merchant
//! recover the capture and notify tokens when the payer returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::parameters::ParameterBag;

use super::CheckoutError;

/// Field holding the JSON-encoded extra data.
pub const EXTRA_DATA_FIELD: &str = "COMPLUS";

/// Decoded `COMPLUS` content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackExtraData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_token: Option<String>,

    /// Caller-defined keys, preserved as-is.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl CallbackExtraData {
    /// Reads the extra data stored in `details`; absent or empty means default.
    pub fn from_details(details: &ParameterBag) -> Result<Self, CheckoutError> {
        match details.get_non_empty(EXTRA_DATA_FIELD) {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| CheckoutError::InvalidExtraData(e.to_string())),
            None => Ok(Self::default()),
        }
    }

    /// Encodes the extra data back into `details`.
    pub fn write_to(&self, details: &mut ParameterBag) -> Result<(), CheckoutError> {
        let encoded = serde_json::to_string(self)
            .map_err(|e| CheckoutError::InvalidExtraData(e.to_string()))?;
        details.insert(EXTRA_DATA_FIELD, encoded);
        Ok(())
    }
}
