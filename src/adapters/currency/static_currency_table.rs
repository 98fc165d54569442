//! ISO 4217 minor-unit exponents.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::DomainError;
use crate::ports::CurrencyExponentLookup;

/// Currencies without minor units.
const ZERO_DECIMAL: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

/// Currencies with three decimal places.
const THREE_DECIMAL: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Currencies with four decimal places.
const FOUR_DECIMAL: &[&str] = &["CLF", "UYW"];

/// Currencies with two decimal places.
const TWO_DECIMAL: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF",
    "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR",
    "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF",
    "IDR", "ILS", "INR", "IRR", "JMD", "KES", "KGS", "KHR", "KPW", "KYD", "KZT", "LAK", "LBP",
    "LKR", "LRD", "LSL", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "PAB", "PEN", "PGK",
    "PHP", "PKR", "PLN", "QAR", "RON", "RSD", "RUB", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD",
    "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TOP",
    "TRY", "TTD", "TWD", "TZS", "UAH", "USD", "UYU", "UZS", "VES", "WST", "XCD", "YER", "ZAR",
    "ZMW", "ZWL",
];

static ISO_4217: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let groups: [(&[&str], u32); 4] = [
        (ZERO_DECIMAL, 0),
        (TWO_DECIMAL, 2),
        (THREE_DECIMAL, 3),
        (FOUR_DECIMAL, 4),
    ];
    groups
        .iter()
        .flat_map(|(codes, exponent)| codes.iter().map(move |code| (*code, *exponent)))
        .collect()
});

/// Static ISO 4217 table, optionally extended with merchant-specific codes.
#[derive(Debug, Clone, Default)]
pub struct StaticCurrencyTable {
    overrides: HashMap<String, u32>,
}

impl StaticCurrencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides a currency exponent.
    pub fn with_currency(mut self, code: impl AsRef<str>, exponent: u32) -> Self {
        self.overrides
            .insert(code.as_ref().trim().to_uppercase(), exponent);
        self
    }

    /// Synchronous lookup, case-insensitive.
    pub fn get(&self, currency_code: &str) -> Option<u32> {
        let code = currency_code.trim().to_uppercase();
        self.overrides
            .get(&code)
            .copied()
            .or_else(|| ISO_4217.get(code.as_str()).copied())
    }
}

#[async_trait]
impl CurrencyExponentLookup for StaticCurrencyTable {
    async fn exponent(&self, currency_code: &str) -> Result<u32, DomainError> {
        self.get(currency_code)
            .ok_or_else(|| DomainError::currency_not_found(currency_code))
    }
}
