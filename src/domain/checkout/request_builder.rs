//! Assembly of the signed payment-initiation request.

use crate::domain::parameters::ParameterBag;
use crate::domain::signing::{CanonicalSigner, SIGNATURE_FIELD};

use super::SigningOptions;

/// Field carrying the merchant identifier.
pub const MERCHANT_ID_FIELD: &str = "PSPID";
/// Page the payer lands on after an accepted payment.
pub const ACCEPT_URL_FIELD: &str = "ACCEPTURL";
/// Page the payer lands on after cancelling.
pub const CANCEL_URL_FIELD: &str = "CANCELURL";

/// Builds the outgoing parameter set for the hosted payment page.
///
/// # Steps
///
/// 1. Default `ACCEPTURL` / `CANCELURL` to the return URL, if one was given
/// 2. Merge the configured optional parameters underneath the explicit ones
/// 3. Drop every parameter whose canonical value is empty
/// 4. Inject `PSPID`
/// 5. Sign with the SHA-IN passphrase and attach `SHASIGN`
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    options: &'a SigningOptions,
    return_url: Option<String>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(options: &'a SigningOptions) -> Self {
        Self {
            options,
            return_url: None,
        }
    }

    /// Single URL used for both the accept and the cancel outcome when the
    /// request does not name them itself.
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    /// Produces the finished, signed parameter set.
    pub fn build(&self, base: ParameterBag) -> ParameterBag {
        let mut params = base;

        if let Some(url) = &self.return_url {
            for field in [ACCEPT_URL_FIELD, CANCEL_URL_FIELD] {
                if params.is_unset(field) {
                    params.insert(field, url.as_str());
                }
            }
        }

        params.merge_defaults(self.options.optional_parameters());
        params.retain_non_empty();
        params.insert(MERCHANT_ID_FIELD, self.options.pspid());

        let signature = CanonicalSigner::new(self.options.hashing_method())
            .sign(&params, self.options.sha_in_passphrase());
        params.insert(SIGNATURE_FIELD, signature);

        params
    }
}

/// Builds a signed request from `base` with `options`.
pub fn build(base: ParameterBag, options: &SigningOptions) -> ParameterBag {
    RequestBuilder::new(options).build(base)
}
