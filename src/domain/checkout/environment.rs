//! Hosted payment page environments.

use serde::{Deserialize, Serialize};

const PRODUCTION_URL: &str = "https://e-payment.postfinance.ch/ncol/prod/orderstandard.asp";
const TEST_URL: &str = "https://e-payment.postfinance.ch/ncol/test/orderstandard.asp";

/// Which hosted payment page receives the payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEnvironment {
    Test,
    Production,
}

impl GatewayEnvironment {
    /// Maps the sandbox flag to an environment.
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            GatewayEnvironment::Test
        } else {
            GatewayEnvironment::Production
        }
    }

    pub fn is_sandbox(&self) -> bool {
        *self == GatewayEnvironment::Test
    }

    /// URL of the hosted payment page for this environment.
    pub fn offsite_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Test => TEST_URL,
            GatewayEnvironment::Production => PRODUCTION_URL,
        }
    }
}
