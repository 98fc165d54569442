//! Conversion of a merchant payment into request parameters.

use serde::{Deserialize, Serialize};

use crate::domain::parameters::ParameterBag;

/// A payment as known by the merchant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Merchant order number, sent as `ORDERID`.
    pub number: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Total amount in minor units (cents, rappen, ...).
    pub total_amount: i64,
    /// Free text shown on the payment page, sent as `COM`.
    pub description: Option<String>,
}

impl Payment {
    /// Writes the order fields into `details`, keeping everything else.
    pub fn apply_to(&self, details: &mut ParameterBag) {
        details.insert("ORDERID", self.number.as_str());
        details.insert("CURRENCY", self.currency_code.as_str());
        details.insert("AMOUNT", self.total_amount);
        details.insert("COM", self.description.clone());
    }

    /// Returns the request parameters for a fresh payment.
    pub fn to_parameters(&self) -> ParameterBag {
        let mut details = ParameterBag::new();
        self.apply_to(&mut details);
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::ParameterValue;

    fn payment() -> Payment {
        Payment {
            number: "ORDER-1001".to_string(),
            currency_code: "CHF".to_string(),
            total_amount: 4990,
            description: Some("Two books".to_string()),
        }
    }

    #[test]
    fn converts_to_order_fields() {
        let params = payment().to_parameters();

        assert_eq!(params.get_str("ORDERID"), Some("ORDER-1001".to_string()));
        assert_eq!(params.get_str("CURRENCY"), Some("CHF".to_string()));
        assert_eq!(params.get("AMOUNT"), Some(&ParameterValue::Integer(4990)));
        assert_eq!(params.get_str("COM"), Some("Two books".to_string()));
    }

    #[test]
    fn missing_description_is_null() {
        let params = Payment {
            description: None,
            ..payment()
        }
        .to_parameters();

        assert_eq!(params.get("COM"), Some(&ParameterValue::Null));
    }

    #[test]
    fn apply_to_keeps_existing_details() {
        let mut details = ParameterBag::new().with("LANGUAGE", "fr_CH");

        payment().apply_to(&mut details);

        assert_eq!(details.get_str("LANGUAGE"), Some("fr_CH".to_string()));
        assert_eq!(details.len(), 5);
    }
}
