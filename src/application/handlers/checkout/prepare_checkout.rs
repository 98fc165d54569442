//! PrepareCheckoutHandler - Builds the signed redirect to the hosted payment page.

use std::sync::Arc;

use crate::domain::checkout::{
    CallbackExtraData, CheckoutError, Payment, RequestBuilder, SigningOptions, ACCEPT_URL_FIELD,
    CANCEL_URL_FIELD,
};
use crate::domain::parameters::ParameterBag;

/// Field echoed back by the provider on notifications.
pub const PARAMVAR_FIELD: &str = "PARAMVAR";

/// Token that brings the payer back to the merchant after payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureToken {
    /// Opaque token hash.
    pub hash: String,
    /// URL the payer returns to; used for both accept and cancel.
    pub target_url: String,
}

/// Command to prepare an off-site checkout.
#[derive(Debug, Clone, Default)]
pub struct PrepareCheckoutCommand {
    /// Details stored for this payment so far.
    pub details: ParameterBag,
    /// Merchant payment to convert, if the details are not populated yet.
    pub payment: Option<Payment>,
    pub capture_token: Option<CaptureToken>,
    /// Hash of the token the provider's notification will carry.
    pub notify_token: Option<String>,
}

/// POST redirect to the hosted payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffSiteRedirect {
    pub url: String,
    pub parameters: ParameterBag,
}

impl OffSiteRedirect {
    /// Form fields for an auto-submitting POST form.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.parameters.to_form_pairs()
    }
}

/// Result of preparing a checkout.
#[derive(Debug, Clone)]
pub struct PrepareCheckoutResult {
    /// Updated details to store before redirecting.
    pub details: ParameterBag,
    pub redirect: OffSiteRedirect,
}

/// Handler for preparing the payment-initiation redirect.
pub struct PrepareCheckoutHandler {
    options: Arc<SigningOptions>,
}

impl PrepareCheckoutHandler {
    pub fn new(options: Arc<SigningOptions>) -> Self {
        Self { options }
    }

    pub fn handle(
        &self,
        cmd: PrepareCheckoutCommand,
    ) -> Result<PrepareCheckoutResult, CheckoutError> {
        let mut details = cmd.details;

        // 1. Convert the payment
        if let Some(payment) = &cmd.payment {
            payment.apply_to(&mut details);
        }

        // 2. Record callback tokens in the extra data
        let mut extra = CallbackExtraData::from_details(&details)?;
        if extra.capture_token.is_none() {
            if let Some(token) = &cmd.capture_token {
                extra.capture_token = Some(token.hash.clone());
            }
        }
        if extra.notify_token.is_none() {
            if let Some(token) = &cmd.notify_token {
                extra.notify_token = Some(token.clone());
                details.insert(PARAMVAR_FIELD, token.as_str());
            }
        }
        extra.write_to(&mut details)?;

        // 3. Default accept/cancel to the capture target
        if let Some(token) = &cmd.capture_token {
            for field in [ACCEPT_URL_FIELD, CANCEL_URL_FIELD] {
                if details.is_unset(field) {
                    details.insert(field, token.target_url.as_str());
                }
            }
        }

        // 4. Sign
        let parameters = RequestBuilder::new(&self.options).build(details.clone());

        tracing::info!(
            order_id = details.get_str("ORDERID").as_deref().unwrap_or_default(),
            sandbox = self.options.is_sandbox(),
            field_count = parameters.len(),
            "Prepared off-site checkout"
        );

        Ok(PrepareCheckoutResult {
            details,
            redirect: OffSiteRedirect {
                url: self.options.offsite_url().to_string(),
                parameters,
            },
        })
    }
}
