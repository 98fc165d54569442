//! HandleReturnHandler - Processes the payer's return from the hosted page.
//!
//! The provider appends the outcome to the accept/cancel URL as query
//! parameters, signed with the SHA-OUT passphrase. A return call is
//! recognised by its `PAYID`.

use std::sync::Arc;

use crate::application::handlers::inbound::{
    apply_inbound, expected_amount, observe_transition, ORDER_ID_FIELD,
};
use crate::domain::checkout::SigningOptions;
use crate::domain::notification::{NotificationVerifier, VerificationError};
use crate::domain::parameters::ParameterBag;
use crate::domain::status::{resolve_parameters, PaymentLifecycleState};
use crate::ports::CurrencyExponentLookup;

/// Query parameter identifying a return call.
pub const PAYID_FIELD: &str = "PAYID";

/// Command to process a return call.
#[derive(Debug, Clone)]
pub struct HandleReturnCommand {
    /// Details stored for this payment.
    pub details: ParameterBag,
    /// Query parameters of the return request.
    pub query: ParameterBag,
}

impl HandleReturnCommand {
    /// Returns true if the query looks like a return from the hosted page.
    pub fn is_return_call(query: &ParameterBag) -> bool {
        query.get_non_empty(PAYID_FIELD).is_some()
    }
}

/// Result of a verified return call.
#[derive(Debug, Clone)]
pub struct HandleReturnResult {
    /// Stored details with the returned parameters applied.
    pub details: ParameterBag,
    pub previous_state: PaymentLifecycleState,
    pub state: PaymentLifecycleState,
}

/// Handler for return calls.
pub struct HandleReturnHandler {
    options: Arc<SigningOptions>,
    currencies: Arc<dyn CurrencyExponentLookup>,
}

impl HandleReturnHandler {
    pub fn new(
        options: Arc<SigningOptions>,
        currencies: Arc<dyn CurrencyExponentLookup>,
    ) -> Self {
        Self {
            options,
            currencies,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleReturnCommand,
    ) -> Result<HandleReturnResult, VerificationError> {
        if !HandleReturnCommand::is_return_call(&cmd.query) {
            return Err(VerificationError::MissingField("PAYID"));
        }

        let order_id = cmd.details.get_str(ORDER_ID_FIELD).unwrap_or_default();
        let (amount, exponent) = expected_amount(&cmd.details, self.currencies.as_ref()).await?;

        if let Err(err) =
            NotificationVerifier::new(&self.options).verify(&cmd.query, amount, exponent)
        {
            tracing::warn!(order_id = %order_id, reason = %err, "Return call rejected");
            return Err(err);
        }

        let previous_state = resolve_parameters(&cmd.details);
        let mut details = cmd.details;
        apply_inbound(&mut details, &cmd.query);
        let state = resolve_parameters(&details);

        observe_transition(&order_id, previous_state, state);
        tracing::info!(order_id = %order_id, state = %state, "Return call processed");

        Ok(HandleReturnResult {
            details,
            previous_state,
            state,
        })
    }
}
