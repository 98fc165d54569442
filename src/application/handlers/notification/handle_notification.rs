//! HandleNotificationHandler - Processes the provider's asynchronous notification.
//!
//! The first notification for an order arrives before the merchant has
//! stored the payment and is rejected with a retryable 500; the provider
//! redelivers and the second delivery is verified.

use std::sync::Arc;

use http::StatusCode;

use crate::application::handlers::inbound::{
    apply_inbound, expected_amount, observe_transition, ORDER_ID_FIELD,
};
use crate::domain::checkout::SigningOptions;
use crate::domain::notification::{NotificationAttempt, NotificationVerifier, VerificationError};
use crate::domain::parameters::ParameterBag;
use crate::domain::status::{resolve_parameters, PaymentLifecycleState};
use crate::ports::{CurrencyExponentLookup, NotificationMarkerStore};

/// Body acknowledging an accepted notification.
pub const ACCEPTED_BODY: &str = "OK";

/// Command to process a notification.
#[derive(Debug, Clone)]
pub struct HandleNotificationCommand {
    /// Details stored for this payment.
    pub details: ParameterBag,
    /// Parameters posted by the provider.
    pub parameters: ParameterBag,
}

/// Result of an accepted notification.
#[derive(Debug, Clone)]
pub struct HandleNotificationResult {
    /// Stored details with the notified parameters applied.
    pub details: ParameterBag,
    pub previous_state: PaymentLifecycleState,
    pub state: PaymentLifecycleState,
}

/// HTTP answer to send back to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationResponse {
    pub status: StatusCode,
    pub body: &'static str,
}

impl NotificationResponse {
    pub fn accepted() -> Self {
        Self {
            status: StatusCode::OK,
            body: ACCEPTED_BODY,
        }
    }

    /// Generic answer for a rejected notification.
    pub fn rejected(err: &VerificationError) -> Self {
        Self {
            status: err.status_code(),
            body: err.public_message(),
        }
    }

    /// Answer for any handler outcome.
    pub fn from_outcome(outcome: &Result<HandleNotificationResult, VerificationError>) -> Self {
        match outcome {
            Ok(_) => Self::accepted(),
            Err(err) => Self::rejected(err),
        }
    }
}

/// Handler for provider notifications.
pub struct HandleNotificationHandler {
    options: Arc<SigningOptions>,
    markers: Arc<dyn NotificationMarkerStore>,
    currencies: Arc<dyn CurrencyExponentLookup>,
}

impl HandleNotificationHandler {
    pub fn new(
        options: Arc<SigningOptions>,
        markers: Arc<dyn NotificationMarkerStore>,
        currencies: Arc<dyn CurrencyExponentLookup>,
    ) -> Self {
        Self {
            options,
            markers,
            currencies,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleNotificationCommand,
    ) -> Result<HandleNotificationResult, VerificationError> {
        let order_id = cmd
            .details
            .get_non_empty(ORDER_ID_FIELD)
            .ok_or(VerificationError::MissingField("ORDERID"))?;

        // 1. First contact is always premature
        let attempt: NotificationAttempt = self
            .markers
            .mark_seen(&order_id)
            .await
            .map_err(|e| VerificationError::Storage(e.message))?
            .into();
        if attempt == NotificationAttempt::FirstContact {
            tracing::info!(order_id = %order_id, "First notification deferred");
            return Err(VerificationError::PrematureNotification);
        }

        // 2. Expected amount from the stored payment
        let (amount, exponent) = expected_amount(&cmd.details, self.currencies.as_ref()).await?;

        // 3. Signature and amount
        let verified = NotificationVerifier::new(&self.options)
            .verify_attempt(attempt, &cmd.parameters, amount, exponent)
            .map_err(|err| {
                tracing::warn!(order_id = %order_id, reason = %err, "Notification rejected");
                err
            })?;

        // 4. Apply and resolve
        let previous_state = resolve_parameters(&cmd.details);
        let mut details = cmd.details;
        apply_inbound(&mut details, verified.parameters());
        let state = resolve_parameters(&details);

        observe_transition(&order_id, previous_state, state);
        tracing::info!(
            order_id = %order_id,
            from = %previous_state,
            state = %state,
            "Notification accepted"
        );

        Ok(HandleNotificationResult {
            details,
            previous_state,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryNotificationMarkerStore, StaticCurrencyTable};
    use crate::domain::checkout::options::test_options;
    use crate::domain::foundation::DomainError;
    use crate::domain::notification::{EARLY_STATE_BODY, INVALID_NOTIFICATION_BODY};
    use crate::domain::parameters::ParameterValue;
    use crate::domain::signing::{sign, HashAlgorithm};
    use crate::ports::MarkResult;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingMarkerStore;

    #[async_trait]
    impl NotificationMarkerStore for FailingMarkerStore {
        async fn mark_seen(&self, _order_id: &str) -> Result<MarkResult, DomainError> {
            Err(DomainError::storage("marker backend unavailable"))
        }

        async fn is_seen(&self, _order_id: &str) -> Result<bool, DomainError> {
            Err(DomainError::storage("marker backend unavailable"))
        }

        async fn delete_before(&self, _cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    fn handler_with(markers: Arc<dyn NotificationMarkerStore>) -> HandleNotificationHandler {
        HandleNotificationHandler::new(
            Arc::new(test_options()),
            markers,
            Arc::new(StaticCurrencyTable::new()),
        )
    }

    fn stored() -> ParameterBag {
        ParameterBag::new()
            .with("ORDERID", "ORDER-1")
            .with("AMOUNT", 1000)
            .with("CURRENCY", "CHF")
    }

    fn notification(status: &str, amount: &str) -> ParameterBag {
        let mut params = ParameterBag::new()
            .with("ORDERID", "ORDER-1")
            .with("CURRENCY", "CHF")
            .with("AMOUNT", amount)
            .with("STATUS", status)
            .with("PAYID", "3014512345");
        let signature = sign(&params, "out-secret-passphrase", HashAlgorithm::Sha512);
        params.insert("SHASIGN", signature);
        params
    }

    fn command(parameters: ParameterBag) -> HandleNotificationCommand {
        HandleNotificationCommand {
            details: stored(),
            parameters,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // First contact
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn first_notification_is_premature() {
        let handler = handler_with(Arc::new(InMemoryNotificationMarkerStore::new()));

        let outcome = handler.handle(command(notification("9", "10.00"))).await;

        assert!(matches!(outcome, Err(VerificationError::PrematureNotification)));
        let response = NotificationResponse::from_outcome(&outcome);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, EARLY_STATE_BODY);
    }

    #[tokio::test]
    async fn redelivery_is_accepted() {
        let handler = handler_with(Arc::new(InMemoryNotificationMarkerStore::new()));
        let _ = handler.handle(command(notification("9", "10.00"))).await;

        let outcome = handler.handle(command(notification("9", "10.00"))).await;

        let result = outcome.as_ref().unwrap();
        assert_eq!(result.state, PaymentLifecycleState::Captured);
        assert_eq!(result.details.get_str("PAYID"), Some("3014512345".to_string()));
        assert_eq!(
            NotificationResponse::from_outcome(&outcome),
            NotificationResponse::accepted()
        );
    }

    #[tokio::test]
    async fn status_change_after_accepted_notification_is_verified() {
        let markers = Arc::new(InMemoryNotificationMarkerStore::new());
        markers.mark_seen("ORDER-1").await.unwrap();
        let handler = handler_with(markers);
        let authorized = handler
            .handle(command(notification("5", "10.00")))
            .await
            .unwrap();
        assert_eq!(authorized.details.get("AMOUNT"), Some(&ParameterValue::Integer(1000)));

        let captured = handler
            .handle(HandleNotificationCommand {
                details: authorized.details,
                parameters: notification("9", "10.00"),
            })
            .await
            .unwrap();

        assert_eq!(captured.previous_state, PaymentLifecycleState::Authorized);
        assert_eq!(captured.state, PaymentLifecycleState::Captured);
    }

    #[tokio::test]
    async fn premature_check_runs_before_signature_check() {
        let handler = handler_with(Arc::new(InMemoryNotificationMarkerStore::new()));

        let outcome = handler
            .handle(command(ParameterBag::new().with("STATUS", "9")))
            .await;

        assert!(matches!(outcome, Err(VerificationError::PrematureNotification)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn invalid_signature_on_redelivery_is_bad_request() {
        let markers = Arc::new(InMemoryNotificationMarkerStore::new());
        markers.mark_seen("ORDER-1").await.unwrap();
        let handler = handler_with(markers);

        let outcome = handler
            .handle(command(notification("9", "10.00").with("STATUS", "5")))
            .await;

        assert!(matches!(outcome, Err(VerificationError::SignatureMismatch)));
        let response = NotificationResponse::from_outcome(&outcome);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, INVALID_NOTIFICATION_BODY);
    }

    #[tokio::test]
    async fn amount_mismatch_on_redelivery_is_rejected() {
        let markers = Arc::new(InMemoryNotificationMarkerStore::new());
        markers.mark_seen("ORDER-1").await.unwrap();
        let handler = handler_with(markers);

        let outcome = handler.handle(command(notification("9", "10.01"))).await;

        assert!(matches!(
            outcome,
            Err(VerificationError::AmountMismatch { expected: 1000, .. })
        ));
    }

    #[tokio::test]
    async fn missing_order_id_is_rejected() {
        let handler = handler_with(Arc::new(InMemoryNotificationMarkerStore::new()));
        let cmd = HandleNotificationCommand {
            details: ParameterBag::new(),
            parameters: notification("9", "10.00"),
        };

        let outcome = handler.handle(cmd).await;

        assert!(matches!(outcome, Err(VerificationError::MissingField("ORDERID"))));
    }

    #[tokio::test]
    async fn marker_failure_is_retryable_storage_error() {
        let handler = handler_with(Arc::new(FailingMarkerStore));

        let outcome = handler.handle(command(notification("9", "10.00"))).await;

        let err = outcome.unwrap_err();
        assert!(matches!(err, VerificationError::Storage(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn unexpected_transition_is_still_applied() {
        let markers = Arc::new(InMemoryNotificationMarkerStore::new());
        markers.mark_seen("ORDER-1").await.unwrap();
        let handler = handler_with(markers);
        let cmd = HandleNotificationCommand {
            details: stored().with("STATUS", "9"),
            parameters: notification("8", "10.00"),
        };

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.previous_state, PaymentLifecycleState::Captured);
        assert_eq!(result.state, PaymentLifecycleState::Refunded);
    }
}
