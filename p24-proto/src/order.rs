//! Payment orders and transaction shapes.

use serde::{Deserialize, Serialize};

use crate::enums::{Currency, Encoding, Language};

/// A caller-supplied payment intent, registered with the gateway to start a
/// transaction.
///
/// `session_id` is chosen by the caller and must be unique per payment
/// attempt; the gateway rejects collisions. `amount` is in minor currency
/// units (grosze for PLN). Field validity (amount bounds, currency support)
/// is enforced by the gateway, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Caller-chosen unique identifier of this payment attempt.
    pub session_id: String,

    /// Amount in minor currency units.
    pub amount: u64,

    /// Transaction currency.
    pub currency: Currency,

    /// Description shown to the payer.
    pub description: String,

    /// Payer's e-mail address.
    pub email: String,

    /// Payer's full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Payer's street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Payer's postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Payer's city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Payer's country code (ISO 3166-1 alpha-2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Payer's phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Payment page language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Preselected payment method id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<u32>,

    /// URL the payer is redirected to after payment.
    pub url_return: String,

    /// URL the gateway delivers transaction notifications to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_status: Option<String>,

    /// Time limit for completing the payment, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,

    /// Payment channel bit mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<u32>,

    /// Whether the gateway should wait for the payment result before
    /// redirecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_result: Option<bool>,

    /// Whether the payer already accepted the gateway regulations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation_accept: Option<bool>,

    /// Shipping cost in minor currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<u32>,

    /// Custom label placed on the payer's bank statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_label: Option<String>,

    /// Character encoding of the order text fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,

    /// Merchant-side reference id of the preselected method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_ref_id: Option<String>,
}

impl Order {
    /// Creates an order with the required fields; all optional gateway
    /// fields start unset.
    #[must_use]
    pub fn new(
        session_id: impl Into<String>,
        amount: u64,
        currency: Currency,
        description: impl Into<String>,
        email: impl Into<String>,
        url_return: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            amount,
            currency,
            description: description.into(),
            email: email.into(),
            client: None,
            address: None,
            zip: None,
            city: None,
            country: None,
            phone: None,
            language: None,
            method: None,
            url_return: url_return.into(),
            url_status: None,
            time_limit: None,
            channel: None,
            wait_for_result: None,
            regulation_accept: None,
            shipping: None,
            transfer_label: None,
            encoding: None,
            method_ref_id: None,
        }
    }
}

/// Success payload of transaction registration: the one-time token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredOrder {
    /// Gateway-issued one-time transaction token.
    pub token: String,
}

/// A created transaction: the gateway token plus the derived payment link.
///
/// The link is computed client-side as `{base}/trnRequest/{token}`; the
/// gateway itself returns only the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Gateway-issued one-time transaction token.
    pub token: String,
    /// Redirect link the payer should be sent to.
    pub link: String,
}

/// Full transaction record as returned by the details lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    /// Bank statement text.
    pub statement: String,
    /// Gateway order id.
    pub order_id: u64,
    /// Caller-chosen session id.
    pub session_id: String,
    /// Numeric transaction status.
    pub status: u32,
    /// Amount in minor currency units.
    pub amount: u64,
    /// Transaction currency.
    pub currency: Currency,
    /// Registration date.
    pub date: String,
    /// Date the payment completed.
    pub date_of_transaction: String,
    /// Payer's e-mail address.
    pub client_email: String,
    /// MD5 of the paying account number.
    #[serde(rename = "accountMD5")]
    pub account_md5: String,
    /// Payment method id used.
    pub payment_method: u32,
    /// Order description.
    pub description: String,
    /// Payer's name.
    pub client_name: String,
    /// Payer's address.
    pub client_address: String,
    /// Payer's city.
    pub client_city: String,
    /// Payer's postal code.
    pub client_postcode: String,
    /// Settlement batch id.
    pub batch_id: u64,
    /// Gateway fee, as a decimal string.
    pub fee: String,
}

/// An offline (bank transfer) transaction registered from a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineTransaction {
    /// Gateway order id.
    pub order_id: u64,
    /// Caller-chosen session id.
    pub session_id: String,
    /// Amount in minor currency units.
    pub amount: u64,
    /// Transfer title the payer must use.
    pub statement: String,
    /// Account number to transfer to.
    pub iban: String,
    /// Account owner name.
    pub iban_owner: String,
    /// Account owner address.
    pub iban_owner_address: String,
}

/// Split-payment breakdown attached to a [`SplitPaymentOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPaymentDetails {
    /// VAT part of the amount, in minor currency units.
    pub vat_amount: u64,
    /// Invoice number the payment settles.
    pub invoice_number: String,
    /// Seller's tax identifier.
    pub nip: String,
    /// Target account for the VAT part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// An [`Order`] registered through the split-payment mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPaymentOrder {
    /// The underlying order.
    #[serde(flatten)]
    pub order: Order,
    /// VAT split details.
    pub split_payment_details: SplitPaymentDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_order() -> Order {
        Order::new(
            "s-1",
            1000,
            Currency::Pln,
            "test order",
            "payer@example.com",
            "https://shop.example/return",
        )
    }

    #[test]
    fn omits_unset_optional_fields() {
        let json = serde_json::to_value(minimal_order()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("sessionId"));
        assert!(object.contains_key("urlReturn"));
        assert!(!object.contains_key("urlStatus"));
        assert!(!object.contains_key("timeLimit"));
    }

    #[test]
    fn split_order_flattens_base_fields() {
        let order = SplitPaymentOrder {
            order: minimal_order(),
            split_payment_details: SplitPaymentDetails {
                vat_amount: 230,
                invoice_number: "FV/1/2026".into(),
                nip: "1234567890".into(),
                iban: None,
            },
        };
        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json["sessionId"], "s-1");
        assert_eq!(json["splitPaymentDetails"]["vatAmount"], 230);
    }
}
