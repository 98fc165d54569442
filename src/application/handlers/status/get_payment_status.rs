//! GetPaymentStatusHandler - Query handler resolving the lifecycle state.

use crate::domain::parameters::ParameterBag;
use crate::domain::status::{
    resolve_parameters, PaymentLifecycleState, PaymentStatusCode, STATUS_FIELD,
};

/// Query for the state of a stored payment.
#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    pub details: ParameterBag,
}

/// Resolved payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPaymentStatusResult {
    pub state: PaymentLifecycleState,
    /// Provider status, if the stored code is one the provider documents.
    pub status_code: Option<PaymentStatusCode>,
}

/// Handler for payment status queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPaymentStatusHandler;

impl GetPaymentStatusHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetPaymentStatusQuery) -> GetPaymentStatusResult {
        let status_code = query
            .details
            .get(STATUS_FIELD)
            .and_then(|value| value.as_integer())
            .and_then(PaymentStatusCode::from_code);

        GetPaymentStatusResult {
            state: resolve_parameters(&query.details),
            status_code,
        }
    }
}
