//! Provider status code vocabulary.

use std::fmt;

/// Status codes reported by the hosted payment page in the `STATUS` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatusCode {
    IncompleteOrInvalid,
    CancelledByClient,
    AuthorisationRefused,
    OrderStored,
    StoredWaitingExternalResult,
    WaitingClientPayment,
    WaitingAuthentication,
    Authorised,
    AuthorisedWaitingExternalResult,
    AuthorisationWaiting,
    AuthorisationNotKnown,
    StandBy,
    OkWithScheduledPayments,
    NotOkWithScheduledPayments,
    AuthorisationToBeRequestedManually,
    AuthorisedAndCancelled,
    AuthorisationCancellationWaiting,
    AuthorisationCancellationUncertain,
    AuthorisationCancellationRefused,
    AuthorisedAndCancelledByMerchant,
    PaymentDeleted,
    PaymentDeletionPending,
    PaymentDeletionUncertain,
    PaymentDeletionRefused,
    PaymentDeletedByMerchant,
    DeletionProcessedByMerchant,
    Refund,
    RefundPending,
    RefundUncertain,
    RefundRefused,
    RefundByMerchant,
    RefundProcessedByMerchant,
    PaymentRequested,
    Payment,
    PaymentUncertain,
    PaymentRefused,
    RefundDeclinedByAcquirer,
    PaymentProcessedByMerchant,
    RefundReversed,
    BeingProcessed,
}

impl PaymentStatusCode {
    /// Every known status, in code order.
    pub const ALL: [PaymentStatusCode; 40] = [
        Self::IncompleteOrInvalid,
        Self::CancelledByClient,
        Self::AuthorisationRefused,
        Self::OrderStored,
        Self::StoredWaitingExternalResult,
        Self::WaitingClientPayment,
        Self::WaitingAuthentication,
        Self::Authorised,
        Self::AuthorisedWaitingExternalResult,
        Self::AuthorisationWaiting,
        Self::AuthorisationNotKnown,
        Self::StandBy,
        Self::OkWithScheduledPayments,
        Self::NotOkWithScheduledPayments,
        Self::AuthorisationToBeRequestedManually,
        Self::AuthorisedAndCancelled,
        Self::AuthorisationCancellationWaiting,
        Self::AuthorisationCancellationUncertain,
        Self::AuthorisationCancellationRefused,
        Self::AuthorisedAndCancelledByMerchant,
        Self::PaymentDeleted,
        Self::PaymentDeletionPending,
        Self::PaymentDeletionUncertain,
        Self::PaymentDeletionRefused,
        Self::PaymentDeletedByMerchant,
        Self::DeletionProcessedByMerchant,
        Self::Refund,
        Self::RefundPending,
        Self::RefundUncertain,
        Self::RefundRefused,
        Self::RefundByMerchant,
        Self::RefundProcessedByMerchant,
        Self::PaymentRequested,
        Self::Payment,
        Self::PaymentUncertain,
        Self::PaymentRefused,
        Self::RefundDeclinedByAcquirer,
        Self::PaymentProcessedByMerchant,
        Self::RefundReversed,
        Self::BeingProcessed,
    ];

    /// Looks up a numeric status code.
    pub fn from_code(code: i64) -> Option<Self> {
        use PaymentStatusCode::*;
        let status = match code {
            0 => IncompleteOrInvalid,
            1 => CancelledByClient,
            2 => AuthorisationRefused,
            4 => OrderStored,
            40 => StoredWaitingExternalResult,
            41 => WaitingClientPayment,
            46 => WaitingAuthentication,
            5 => Authorised,
            50 => AuthorisedWaitingExternalResult,
            51 => AuthorisationWaiting,
            52 => AuthorisationNotKnown,
            55 => StandBy,
            56 => OkWithScheduledPayments,
            57 => NotOkWithScheduledPayments,
            59 => AuthorisationToBeRequestedManually,
            6 => AuthorisedAndCancelled,
            61 => AuthorisationCancellationWaiting,
            62 => AuthorisationCancellationUncertain,
            63 => AuthorisationCancellationRefused,
            64 => AuthorisedAndCancelledByMerchant,
            7 => PaymentDeleted,
            71 => PaymentDeletionPending,
            72 => PaymentDeletionUncertain,
            73 => PaymentDeletionRefused,
            74 => PaymentDeletedByMerchant,
            75 => DeletionProcessedByMerchant,
            8 => Refund,
            81 => RefundPending,
            82 => RefundUncertain,
            83 => RefundRefused,
            84 => RefundByMerchant,
            85 => RefundProcessedByMerchant,
            9 => PaymentRequested,
            91 => Payment,
            92 => PaymentUncertain,
            93 => PaymentRefused,
            94 => RefundDeclinedByAcquirer,
            95 => PaymentProcessedByMerchant,
            96 => RefundReversed,
            99 => BeingProcessed,
            _ => return None,
        };
        Some(status)
    }

    /// Numeric code as sent by the provider.
    pub fn code(&self) -> i64 {
        use PaymentStatusCode::*;
        match self {
            IncompleteOrInvalid => 0,
            CancelledByClient => 1,
            AuthorisationRefused => 2,
            OrderStored => 4,
            StoredWaitingExternalResult => 40,
            WaitingClientPayment => 41,
            WaitingAuthentication => 46,
            Authorised => 5,
            AuthorisedWaitingExternalResult => 50,
            AuthorisationWaiting => 51,
            AuthorisationNotKnown => 52,
            StandBy => 55,
            OkWithScheduledPayments => 56,
            NotOkWithScheduledPayments => 57,
            AuthorisationToBeRequestedManually => 59,
            AuthorisedAndCancelled => 6,
            AuthorisationCancellationWaiting => 61,
            AuthorisationCancellationUncertain => 62,
            AuthorisationCancellationRefused => 63,
            AuthorisedAndCancelledByMerchant => 64,
            PaymentDeleted => 7,
            PaymentDeletionPending => 71,
            PaymentDeletionUncertain => 72,
            PaymentDeletionRefused => 73,
            PaymentDeletedByMerchant => 74,
            DeletionProcessedByMerchant => 75,
            Refund => 8,
            RefundPending => 81,
            RefundUncertain => 82,
            RefundRefused => 83,
            RefundByMerchant => 84,
            RefundProcessedByMerchant => 85,
            PaymentRequested => 9,
            Payment => 91,
            PaymentUncertain => 92,
            PaymentRefused => 93,
            RefundDeclinedByAcquirer => 94,
            PaymentProcessedByMerchant => 95,
            RefundReversed => 96,
            BeingProcessed => 99,
        }
    }
}

impl fmt::Display for PaymentStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
