//! Refund requests, per-item outcomes, and refund history.

use serde::{Deserialize, Serialize};

use crate::enums::Currency;

/// A single transaction to refund within a [`RefundRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundItem {
    /// Gateway order id of the transaction to refund.
    pub order_id: u64,
    /// Session id of the original order.
    pub session_id: String,
    /// Amount to refund in minor currency units.
    pub amount: u64,
    /// Reason shown in the merchant panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A batch refund instruction. Refund requests carry no signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Caller-chosen id of this refund request.
    pub request_id: String,
    /// Transactions to refund.
    pub refunds: Vec<RefundItem>,
    /// Caller-chosen UUID of the refund batch.
    pub refunds_uuid: String,
    /// URL the gateway delivers refund notifications to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_status: Option<String>,
}

/// Per-item outcome of a refund request.
///
/// Partial success is expressed in-band: each element carries its own
/// status, and the refund call as a whole does not fail merely because one
/// item did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundResult {
    /// Gateway order id of the refunded transaction.
    pub order_id: u64,
    /// Session id of the original order.
    pub session_id: String,
    /// Refunded amount in minor currency units.
    pub amount: u64,
    /// Reason carried over from the request.
    pub description: String,
    /// Outcome status of this item, verbatim from the gateway.
    pub status: String,
    /// Gateway message for a rejected item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One historical refund entry of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundsCollection {
    /// Settlement batch id.
    pub batch_id: u64,
    /// Id of the request that created this refund.
    pub request_id: String,
    /// Date the refund was made.
    pub date: String,
    /// Panel login that ordered the refund.
    pub login: String,
    /// Refund description.
    pub description: String,
    /// Numeric refund status.
    pub status: u32,
    /// Refunded amount in minor currency units.
    pub amount: u64,
}

/// A transaction together with its refund history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithRefunds {
    /// Gateway order id.
    pub order_id: u64,
    /// Session id of the original order.
    pub session_id: String,
    /// Transaction amount in minor currency units.
    pub amount: u64,
    /// Transaction currency.
    pub currency: Currency,
    /// Refunds made against this transaction.
    pub refunds: Vec<RefundsCollection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_outcome_surfaces_both_entries() {
        let body = r#"[
            {"orderId": 1, "sessionId": "a", "amount": 100, "description": "r", "status": "success"},
            {"orderId": 2, "sessionId": "b", "amount": 200, "description": "r", "status": "failed", "message": "insufficient funds"}
        ]"#;
        let results: Vec<RefundResult> = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, "success");
        assert_eq!(results[1].status, "failed");
        assert_eq!(results[1].message.as_deref(), Some("insufficient funds"));
    }
}
