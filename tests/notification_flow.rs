//! Integration tests for the inbound side: notification and return call.
//!
//! Simulates the provider with the SHA-OUT passphrase and drives the
//! handlers with the in-memory adapters:
//! 1. Merchant prepares the checkout and stores the details
//! 2. Provider notifies; the first delivery is deferred
//! 3. Provider redelivers; details are updated and the state resolved
//! 4. Payer returns through the accept URL

use std::sync::Arc;

use http::StatusCode;

use postfinance_checkout::adapters::{InMemoryNotificationMarkerStore, StaticCurrencyTable};
use postfinance_checkout::application::{
    CaptureToken, GetPaymentStatusHandler, GetPaymentStatusQuery, HandleNotificationCommand,
    HandleNotificationHandler, HandleReturnCommand, HandleReturnHandler, NotificationResponse,
    PrepareCheckoutCommand, PrepareCheckoutHandler,
};
use postfinance_checkout::domain::checkout::{Payment, SigningOptions};
use postfinance_checkout::domain::notification::VerificationError;
use postfinance_checkout::domain::parameters::{ParameterBag, ParameterValue};
use postfinance_checkout::domain::signing::{sign, HashAlgorithm};
use postfinance_checkout::domain::status::PaymentLifecycleState;
use postfinance_checkout::ports::NotificationMarkerStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

const SHA_OUT: &str = "provider-out-secret";

struct Shop {
    options: Arc<SigningOptions>,
    markers: Arc<InMemoryNotificationMarkerStore>,
    currencies: Arc<StaticCurrencyTable>,
}

impl Shop {
    fn new() -> Self {
        let options = SigningOptions::builder()
            .sha_in_passphrase("merchant-in-secret")
            .sha_out_passphrase(SHA_OUT)
            .pspid("MyPSPID")
            .sandbox(true)
            .build()
            .unwrap();
        Self {
            options: Arc::new(options),
            markers: Arc::new(InMemoryNotificationMarkerStore::new()),
            currencies: Arc::new(StaticCurrencyTable::new()),
        }
    }

    fn prepare(&self, currency: &str, total_amount: i64) -> ParameterBag {
        PrepareCheckoutHandler::new(self.options.clone())
            .handle(PrepareCheckoutCommand {
                details: ParameterBag::new(),
                payment: Some(Payment {
                    number: "ORDER-77".to_string(),
                    currency_code: currency.to_string(),
                    total_amount,
                    description: Some("Concert".to_string()),
                }),
                capture_token: Some(CaptureToken {
                    hash: "cap".to_string(),
                    target_url: "https://shop.example/capture/cap".to_string(),
                }),
                notify_token: Some("ntf".to_string()),
            })
            .unwrap()
            .details
    }

    fn notifications(&self) -> HandleNotificationHandler {
        HandleNotificationHandler::new(
            self.options.clone(),
            self.markers.clone(),
            self.currencies.clone(),
        )
    }

    fn returns(&self) -> HandleReturnHandler {
        HandleReturnHandler::new(self.options.clone(), self.currencies.clone())
    }
}

/// Parameters as the provider posts them, signed with SHA-OUT.
fn provider_post(currency: &str, amount: &str, status: &str) -> ParameterBag {
    let mut params = ParameterBag::new()
        .with("orderID", "ORDER-77")
        .with("currency", currency)
        .with("amount", amount)
        .with("PM", "CreditCard")
        .with("ACCEPTANCE", "test123")
        .with("STATUS", status)
        .with("CARDNO", "XXXXXXXXXXXX1111")
        .with("PAYID", "3014512345")
        .with("NCERROR", "0")
        .with("BRAND", "VISA");
    let signature = sign(&params, SHA_OUT, HashAlgorithm::Sha512);
    params.insert("SHASIGN", signature);
    // Echoed, not signed
    params.insert("PARAMVAR", "ntf");
    params
}

// =============================================================================
// Notification
// =============================================================================

#[tokio::test]
async fn first_notification_is_deferred_and_redelivery_accepted() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);
    let handler = shop.notifications();

    let first = handler
        .handle(HandleNotificationCommand {
            details: details.clone(),
            parameters: provider_post("CHF", "10", "9"),
        })
        .await;
    let response = NotificationResponse::from_outcome(&first);
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "NOTIFICATION_EARLY_STATE");
    assert!(shop.markers.is_seen("ORDER-77").await.unwrap());

    let second = handler
        .handle(HandleNotificationCommand {
            details,
            parameters: provider_post("CHF", "10", "9"),
        })
        .await;
    assert_eq!(
        NotificationResponse::from_outcome(&second),
        NotificationResponse::accepted()
    );

    let result = second.unwrap();
    assert_eq!(result.previous_state, PaymentLifecycleState::New);
    assert_eq!(result.state, PaymentLifecycleState::Captured);
    assert_eq!(result.details.get_str("BRAND"), Some("VISA".to_string()));
    // Merchant-side fields survive the replacement
    assert!(result.details.contains_key("COMPLUS"));
}

#[tokio::test]
async fn tampered_redelivery_is_rejected_without_details() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);
    shop.markers.mark_seen("ORDER-77").await.unwrap();

    let outcome = shop
        .notifications()
        .handle(HandleNotificationCommand {
            details,
            parameters: provider_post("CHF", "10", "9").with("amount", "0.10"),
        })
        .await;

    let response = NotificationResponse::from_outcome(&outcome);
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "The notification is invalid.");
    assert!(matches!(outcome, Err(VerificationError::SignatureMismatch)));
}

#[tokio::test]
async fn correctly_signed_wrong_amount_is_rejected() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);
    shop.markers.mark_seen("ORDER-77").await.unwrap();

    let outcome = shop
        .notifications()
        .handle(HandleNotificationCommand {
            details,
            parameters: provider_post("CHF", "10.01", "9"),
        })
        .await;

    assert!(matches!(
        outcome,
        Err(VerificationError::AmountMismatch {
            expected: 1000,
            actual: Some(1001)
        })
    ));
}

#[tokio::test]
async fn zero_decimal_currency_amounts() {
    let shop = Shop::new();
    let details = shop.prepare("JPY", 1500);
    shop.markers.mark_seen("ORDER-77").await.unwrap();

    let result = shop
        .notifications()
        .handle(HandleNotificationCommand {
            details,
            parameters: provider_post("JPY", "1500", "5"),
        })
        .await
        .unwrap();

    assert_eq!(result.state, PaymentLifecycleState::Authorized);
}

// =============================================================================
// Return call and status
// =============================================================================

#[tokio::test]
async fn return_call_updates_status() {
    let shop = Shop::new();
    let details = shop.prepare("EUR", 2550);

    let result = shop
        .returns()
        .handle(HandleReturnCommand {
            details,
            query: provider_post("EUR", "25.50", "5"),
        })
        .await
        .unwrap();

    let status = GetPaymentStatusHandler::new().handle(GetPaymentStatusQuery {
        details: result.details,
    });
    assert_eq!(status.state, PaymentLifecycleState::Authorized);
}

#[tokio::test]
async fn return_call_does_not_touch_notification_marker() {
    let shop = Shop::new();
    let details = shop.prepare("EUR", 2550);

    shop.returns()
        .handle(HandleReturnCommand {
            details,
            query: provider_post("EUR", "25.50", "9"),
        })
        .await
        .unwrap();

    assert!(!shop.markers.is_seen("ORDER-77").await.unwrap());
}

#[tokio::test]
async fn notification_after_return_call_is_verified() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);

    let returned = shop
        .returns()
        .handle(HandleReturnCommand {
            details,
            query: provider_post("CHF", "10.00", "5"),
        })
        .await
        .unwrap();
    assert_eq!(returned.details.get("AMOUNT"), Some(&ParameterValue::Integer(1000)));
    shop.markers.mark_seen("ORDER-77").await.unwrap();

    let outcome = shop
        .notifications()
        .handle(HandleNotificationCommand {
            details: returned.details,
            parameters: provider_post("CHF", "10.00", "9"),
        })
        .await;

    assert_eq!(
        NotificationResponse::from_outcome(&outcome),
        NotificationResponse::accepted()
    );
    let result = outcome.unwrap();
    assert_eq!(result.previous_state, PaymentLifecycleState::Authorized);
    assert_eq!(result.state, PaymentLifecycleState::Captured);
}

#[tokio::test]
async fn later_status_change_notification_is_verified() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);
    shop.markers.mark_seen("ORDER-77").await.unwrap();
    let handler = shop.notifications();

    let authorized = handler
        .handle(HandleNotificationCommand {
            details,
            parameters: provider_post("CHF", "10.00", "5"),
        })
        .await
        .unwrap();
    let captured = handler
        .handle(HandleNotificationCommand {
            details: authorized.details,
            parameters: provider_post("CHF", "10.00", "9"),
        })
        .await
        .unwrap();

    assert_eq!(captured.previous_state, PaymentLifecycleState::Authorized);
    assert_eq!(captured.state, PaymentLifecycleState::Captured);
    assert_eq!(captured.details.get("AMOUNT"), Some(&ParameterValue::Integer(1000)));
}

#[tokio::test]
async fn status_before_any_callback_is_new() {
    let shop = Shop::new();
    let details = shop.prepare("CHF", 1000);

    let status = GetPaymentStatusHandler::new().handle(GetPaymentStatusQuery { details });

    assert_eq!(status.state, PaymentLifecycleState::New);
}
