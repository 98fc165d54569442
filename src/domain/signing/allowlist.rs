//! Parameters covered by the SHA-OUT signature.
//!
//! The provider only signs these names on the way back; anything else in a
//! notification or return call is ignored for verification.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Name of the signature field itself.
pub const SIGNATURE_FIELD: &str = "SHASIGN";

/// SHA-OUT parameter names, in the provider's documented order.
pub const SHA_OUT_PARAMETERS: &[&str] = &[
    "AAVADDRESS",
    "AAVCHECK",
    "AAVMAIL",
    "AAVNAME",
    "AAVPHONE",
    "AAVZIP",
    "ACCEPTANCE",
    "ALIAS",
    "AMOUNT",
    "BIC",
    "BIN",
    "BRAND",
    "CARDNO",
    "CCCTY",
    "CN",
    "COLLECTOR_BIC",
    "COLLECTOR_IBAN",
    "COMPLUS",
    "CREATION_STATUS",
    "CREDITDEBIT",
    "CURRENCY",
    "CVCCHECK",
    "DCC_COMMPERCENTAGE",
    "DCC_CONVAMOUNT",
    "DCC_CONVCCY",
    "DCC_EXCHRATE",
    "DCC_EXCHRATESOURCE",
    "DCC_EXCHRATETS",
    "DCC_INDICATOR",
    "DCC_MARGINPERCENTAGE",
    "DCC_VALIDHOURS",
    "DEVICEID",
    "DIGESTCARDNO",
    "ECI",
    "ED",
    "EMAIL",
    "ENCCARDNO",
    "FXAMOUNT",
    "FXCURRENCY",
    "IP",
    "IPCTY",
    "MANDATEID",
    "MOBILEMODE",
    "NBREMAILUSAGE",
    "NBRIPUSAGE",
    "NBRIPUSAGE_ALLTX",
    "NBRUSAGE",
    "NCERROR",
    "ORDERID",
    "PAYID",
    "PAYIDSUB",
    "PAYMENT_REFERENCE",
    "PM",
    "SCO_CATEGORY",
    "SCORING",
    "SEQUENCETYPE",
    "SIGNDATE",
    "STATUS",
    "SUBBRAND",
    "SUBSCRIPTION_ID",
    "TRXDATE",
    "VC",
    "WALLET",
];

static SHA_OUT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SHA_OUT_PARAMETERS.iter().copied().collect());

/// Returns true if `name` (already upper-cased) participates in SHA-OUT.
pub fn is_sha_out_parameter(name: &str) -> bool {
    SHA_OUT_SET.contains(name)
}
