//! Conversion of provider-reported amounts into minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::domain::parameters::ParameterValue;

/// Parses a reported amount in major units, e.g. `"10.00"`.
///
/// Accepts plain and scientific notation; surrounding whitespace is ignored.
pub fn parse_major_units(value: &ParameterValue) -> Option<Decimal> {
    let text = value.canonical();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Scales a major-unit amount by `10^exponent` and rounds half away from
/// zero to whole minor units.
///
/// Returns `None` if the result does not fit.
pub fn to_minor_units(amount: Decimal, exponent: u32) -> Option<i64> {
    let mut scaled = amount;
    for _ in 0..exponent {
        scaled = scaled.checked_mul(Decimal::TEN)?;
    }
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Reported amount in minor units, if it parses and fits.
pub fn reported_minor_units(value: &ParameterValue, exponent: u32) -> Option<i64> {
    parse_major_units(value).and_then(|amount| to_minor_units(amount, exponent))
}
