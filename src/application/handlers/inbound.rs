//! Shared steps for return calls and notifications.

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::notification::{VerificationError, AMOUNT_FIELD};
use crate::domain::parameters::ParameterBag;
use crate::domain::status::PaymentLifecycleState;
use crate::ports::CurrencyExponentLookup;

pub(crate) const ORDER_ID_FIELD: &str = "ORDERID";
pub(crate) const CURRENCY_FIELD: &str = "CURRENCY";

/// Amount in minor units and currency exponent of the stored payment.
pub(crate) async fn expected_amount(
    details: &ParameterBag,
    currencies: &dyn CurrencyExponentLookup,
) -> Result<(i64, u32), VerificationError> {
    let amount = details
        .get(AMOUNT_FIELD)
        .and_then(|value| value.as_integer())
        .ok_or(VerificationError::MissingField("AMOUNT"))?;

    let currency = details
        .get_non_empty(CURRENCY_FIELD)
        .ok_or(VerificationError::MissingField("CURRENCY"))?;

    let exponent = currencies
        .exponent(&currency)
        .await
        .map_err(|err| lookup_error(err, &currency))?;

    Ok((amount, exponent))
}

fn lookup_error(err: DomainError, currency: &str) -> VerificationError {
    match err.code {
        ErrorCode::CurrencyNotFound => VerificationError::UnknownCurrency(currency.to_string()),
        _ => VerificationError::Storage(err.message),
    }
}

/// Applies verified inbound parameters to the stored details.
///
/// The stored `AMOUNT` is the expected amount in minor units and is kept; the
/// provider echoes the amount in major units.
pub(crate) fn apply_inbound(details: &mut ParameterBag, inbound: &ParameterBag) {
    let expected = details.remove(AMOUNT_FIELD);
    details.replace_with(inbound);
    if let Some(amount) = expected {
        details.insert(AMOUNT_FIELD, amount);
    }
}

/// Logs provider-reported moves the lifecycle does not allow.
///
/// The provider is authoritative, so the new state is kept either way.
pub(crate) fn observe_transition(
    order_id: &str,
    previous: PaymentLifecycleState,
    next: PaymentLifecycleState,
) {
    if previous != next && !previous.can_transition_to(&next) {
        tracing::warn!(
            order_id,
            from = %previous,
            to = %next,
            "Provider reported an unexpected lifecycle transition"
        );
    }
}
