//! Verification requests and inbound transaction notifications.

use serde::{Deserialize, Serialize};

use crate::enums::Currency;

/// The quadruple the gateway requires to confirm a transaction.
///
/// `session_id`, `amount` and `currency` must match the original order and
/// `order_id` comes from the transaction notification; a mismatch fails at
/// the gateway, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Session id of the original order.
    pub session_id: String,
    /// Gateway order id from the notification.
    pub order_id: u64,
    /// Amount in minor currency units.
    pub amount: u64,
    /// Transaction currency.
    pub currency: Currency,
}

/// Success payload of the verify call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Verification status literal; `"success"` on a confirmed payment.
    pub status: String,
}

/// An inbound transaction notification delivered to the merchant's status
/// URL when a payment completes.
///
/// The `sign` field carries the gateway's signature over the remaining
/// fields; verify it before trusting the notification.
///
/// # JSON Format
///
/// ```json
/// {
///   "merchantId": 12345,
///   "posId": 12345,
///   "sessionId": "s-1",
///   "amount": 1000,
///   "originAmount": 1000,
///   "currency": "PLN",
///   "orderId": 300100,
///   "methodId": 25,
///   "statement": "p24-A1-B2-C3",
///   "sign": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionNotification {
    /// Merchant identifier.
    pub merchant_id: u32,
    /// Point-of-sale identifier.
    pub pos_id: u32,
    /// Session id of the paid order.
    pub session_id: String,
    /// Paid amount in minor currency units.
    pub amount: u64,
    /// Originally registered amount in minor currency units.
    pub origin_amount: u64,
    /// Transaction currency.
    pub currency: Currency,
    /// Gateway order id; required for verification.
    pub order_id: u64,
    /// Payment method id used by the payer.
    pub method_id: u32,
    /// Bank statement text.
    pub statement: String,
    /// Gateway signature over the notification fields.
    pub sign: String,
}
