//! CurrencyExponentLookup port - Minor-unit exponents for currency codes.
//!
//! Amounts are stored in minor units while the provider reports major units,
//! so verification needs the number of decimal places for each currency.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for looking up a currency's minor-unit exponent.
#[async_trait]
pub trait CurrencyExponentLookup: Send + Sync {
    /// Returns the exponent for an ISO 4217 alphabetic code, e.g. 2 for CHF.
    ///
    /// # Errors
    ///
    /// `DomainError` with `ErrorCode::CurrencyNotFound` for unknown codes.
    async fn exponent(&self, currency_code: &str) -> Result<u32, DomainError>;
}
