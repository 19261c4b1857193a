//! Card charges and card payment notifications.

use serde::{Deserialize, Serialize};

/// Stored card metadata, as returned by card-info lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Gateway reference id of the stored card.
    pub ref_id: String,
    /// Bank identification number of the card.
    pub bin: u32,
    /// Masked card number.
    pub mask: String,
    /// Card scheme name.
    pub card_type: String,
    /// Card expiry date.
    pub card_date: String,
    /// Card hash.
    pub hash: String,
}

/// Success payload of a 3DS card charge: the payer must complete the
/// challenge at `redirect_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card3dsChargeData {
    /// Gateway order id.
    pub order_id: String,
    /// 3DS challenge URL for the payer.
    pub redirect_url: String,
}

/// Success payload of a frictionless card charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardChargeData {
    /// Gateway order id.
    pub order_id: String,
}

/// Parameters of a direct card charge with raw card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardChargeDirectParams {
    /// Token of the registered transaction.
    pub transaction_token: String,
    /// Primary account number.
    pub card_number: String,
    /// Card expiry date.
    pub card_date: String,
    /// Card verification value.
    pub cvv: String,
    /// Cardholder name.
    pub client_name: String,
}

/// Outcome of a direct card charge: either charged immediately or diverted
/// into a 3DS challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardChargeOutcome {
    /// The issuer demanded a 3DS challenge.
    ThreeDs(Card3dsChargeData),
    /// The charge went through without a challenge.
    Charged(CardChargeData),
}

/// Notification for a completed card payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSuccessNotification {
    /// Paid amount in minor currency units.
    pub amount: u64,
    /// Whether 3DS was applied.
    #[serde(rename = "3ds")]
    pub three_ds: bool,
    /// Payment method id.
    pub method: u32,
    /// Gateway reference id of the card.
    pub ref_id: String,
    /// Gateway order id.
    pub order_id: u64,
    /// Session id of the paid order.
    pub session_id: String,
    /// Bank identification number of the card.
    pub bin: u32,
    /// Masked card number.
    #[serde(rename = "maskedCCNumber")]
    pub masked_cc_number: String,
    /// Card expiry date.
    pub cc_exp: String,
    /// Card hash.
    pub hash: String,
    /// Card issuing country.
    pub card_country: String,
    /// Gateway risk score.
    pub risk: u32,
    /// Whether liability shifted to the issuer.
    #[serde(rename = "liabilityshift")]
    pub liability_shift: bool,
    /// Gateway signature over the notification fields.
    pub sign: String,
}

/// Notification for a failed card payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFailureNotification {
    /// Attempted amount in minor currency units.
    pub amount: u64,
    /// Whether 3DS was applied.
    #[serde(rename = "3ds")]
    pub three_ds: bool,
    /// Payment method id.
    pub method: u32,
    /// Gateway order id.
    pub order_id: u64,
    /// Session id of the order.
    pub session_id: String,
    /// Gateway error code.
    pub error_code: String,
    /// Gateway error message.
    pub error_message: String,
    /// Gateway signature over the notification fields.
    pub sign: String,
}

/// An inbound card payment notification, success or failure.
///
/// The two shapes are structurally distinct (the failure shape carries
/// `errorCode`/`errorMessage` and no card data), so the union is
/// discriminated by which fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardPaymentNotification {
    /// The payment completed.
    Success(CardSuccessNotification),
    /// The payment failed.
    Failure(CardFailureNotification),
}

impl CardPaymentNotification {
    /// Returns the gateway signature carried by either shape.
    #[must_use]
    pub fn sign(&self) -> &str {
        match self {
            Self::Success(n) => &n.sign,
            Self::Failure(n) => &n.sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_shape_deserializes_as_failure() {
        let body = r#"{
            "amount": 1000,
            "3ds": true,
            "method": 241,
            "orderId": 42,
            "sessionId": "s-1",
            "errorCode": "05",
            "errorMessage": "Do not honour",
            "sign": "abc"
        }"#;
        let notification: CardPaymentNotification = serde_json::from_str(body).unwrap();
        match notification {
            CardPaymentNotification::Failure(n) => assert_eq!(n.error_code, "05"),
            CardPaymentNotification::Success(_) => panic!("parsed failure shape as success"),
        }
    }

    #[test]
    fn charge_outcome_prefers_3ds_when_redirect_present() {
        let body = r#"{"orderId": "42", "redirectUrl": "https://secure.example/3ds"}"#;
        let outcome: CardChargeOutcome = serde_json::from_str(body).unwrap();
        assert!(matches!(outcome, CardChargeOutcome::ThreeDs(_)));

        let body = r#"{"orderId": "42"}"#;
        let outcome: CardChargeOutcome = serde_json::from_str(body).unwrap();
        assert!(matches!(outcome, CardChargeOutcome::Charged(_)));
    }
}
