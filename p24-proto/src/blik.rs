//! BLIK charges, aliases, and BLIK notifications.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a BLIK alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlikAliasStatus {
    /// The alias is active and chargeable.
    Registered,
    /// The alias was removed by the payer.
    Unregistered,
    /// The alias expired.
    Expired,
}

/// A BLIK alias registered for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikAlias {
    /// Alias value used for charging.
    pub value: String,
    /// Alias type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Alias status.
    pub status: String,
    /// Alias expiry date.
    pub expiration_date: String,
}

/// Notification sent when a payer registers, removes, or loses a BLIK alias.
///
/// The protocol defines no signature for alias updates; authenticity rests
/// on transport-level authentication alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasUpdateNotification {
    /// Alias value.
    pub value: String,
    /// Customer e-mail the alias belongs to.
    pub email: String,
    /// Alias type.
    #[serde(rename = "type")]
    pub kind: String,
    /// New alias status.
    pub status: BlikAliasStatus,
}

/// Recurrence class of a recurring BLIK charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringType {
    /// One-off charge.
    #[serde(rename = "O")]
    OneOff,
    /// Monthly charge.
    #[serde(rename = "M")]
    Monthly,
    /// Annual charge.
    #[serde(rename = "A")]
    Annual,
}

/// Recurring-charge parameters attached to a BLIK charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringParams {
    /// Recurrence class.
    #[serde(rename = "type")]
    pub kind: RecurringType,
    /// Date the recurrence ends.
    pub expiration_date: String,
    /// Whether the payer's bank list is restricted to recurring-capable
    /// banks.
    pub available_banks: bool,
    /// Date of the first charge.
    pub init_date: String,
}

/// Parameters for charging a BLIK account with a 6-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikChargeByCodeParams {
    /// Token of the registered transaction.
    pub token: String,
    /// 6-digit BLIK code entered by the payer.
    pub blik_code: String,
    /// Alias to register alongside the charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_value: Option<String>,
    /// Label shown to the payer for the registered alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_label: Option<String>,
    /// Recurring-charge parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringParams>,
}

/// Discriminator for alias-based BLIK charges; the gateway accepts only
/// `"alias"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlikAliasKind {
    /// Charge through a registered alias.
    #[default]
    #[serde(rename = "alias")]
    Alias,
}

/// Parameters for charging a BLIK account through a registered alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikChargeByAliasParams {
    /// Token of the registered transaction.
    pub token: String,
    /// Charge type discriminator.
    #[serde(rename = "type")]
    pub kind: BlikAliasKind,
    /// Alias value to charge.
    pub alias_value: String,
    /// Label disambiguating the alias on the payer's device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_label: Option<String>,
    /// Recurring-charge parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringParams>,
}

/// Success payload of a BLIK charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikChargeData {
    /// Gateway order id.
    pub order_id: String,
    /// Gateway message.
    pub message: String,
}

/// Result object nested in a [`BlikPaymentNotification`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikPaymentResult {
    /// Error code, empty on success.
    pub error: String,
    /// Gateway message.
    pub message: String,
    /// Payment status literal.
    pub status: String,
    /// BLIK transaction reference.
    pub trx_ref: String,
}

/// Notification for a BLIK payment outcome.
///
/// Carries no signature; the transaction itself is confirmed through the
/// regular transaction notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlikPaymentNotification {
    /// Gateway order id.
    pub order_id: String,
    /// Session id of the order.
    pub session_id: String,
    /// Payment method id.
    pub method: u32,
    /// Detailed outcome.
    pub result: BlikPaymentResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_charge_serializes_type_discriminator() {
        let params = BlikChargeByAliasParams {
            token: "tok".into(),
            kind: BlikAliasKind::Alias,
            alias_value: "alias-1".into(),
            alias_label: None,
            recurring: None,
        };
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(json["type"], "alias");
        assert_eq!(json["aliasValue"], "alias-1");
    }

    #[test]
    fn alias_status_uses_uppercase_wire_form() {
        let status: BlikAliasStatus = serde_json::from_str(r#""REGISTERED""#).unwrap();
        assert_eq!(status, BlikAliasStatus::Registered);
    }
}
