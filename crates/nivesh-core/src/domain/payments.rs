//! Khalti payment gateway types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transaction type for a payment initiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Recurring systematic investment plan.
    Sip,
    /// One-off lump-sum purchase.
    Lumpsum,
}

/// SIP installment interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SipInterval {
    Monthly,
    Quarterly,
}

/// SIP installment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SipMode {
    /// A fixed number of installments.
    Limited,
    /// Open-ended; `installmentNumber` is sent as 0.
    Unlimited,
}

/// The SIP sub-object of a payment initiation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipPlan {
    pub interval_type: SipInterval,
    pub mode: SipMode,
    pub installment_number: u32,
    /// Serialized as `YYYY-MM-DD`.
    pub start_date: NaiveDate,
}

/// Request body for `POST /payments/khalti/initiate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KhaltiInitiateRequest {
    pub amount: u64,
    pub transaction_type: TransactionType,
    /// Scheme id; the gateway expects this as a string.
    pub scheme: String,
    pub return_url: String,
    pub sip: SipPlan,
}

impl KhaltiInitiateRequest {
    /// Returns the request with its SIP start date replaced.
    ///
    /// Configured payloads carry a fixed date; callers normally stamp the
    /// current day here before sending.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.sip.start_date = start_date;
        self
    }
}

/// Success response from `POST /payments/khalti/initiate`.
///
/// Snake_case on the wire, as the gateway returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KhaltiInitiateResponse {
    /// Gateway payment index tracking the transaction.
    pub pidx: String,
    pub payment_url: String,
    pub expires_at: String,
    pub expires_in: i64,
}
