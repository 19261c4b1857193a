//! Payment method listings.

use serde::{Deserialize, Serialize};

/// Availability windows of a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityHours {
    /// Weekday availability window.
    pub monday_to_friday: String,
    /// Saturday availability window.
    pub saturday: String,
    /// Sunday availability window.
    pub sunday: String,
}

/// A payment method offered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Display name.
    pub name: String,
    /// Method id used when preselecting a method on an order.
    pub id: u32,
    /// Method group.
    pub group: String,
    /// Method subgroup.
    pub subgroup: String,
    /// Whether the method is currently enabled.
    pub status: bool,
    /// Logo URL.
    pub img_url: String,
    /// Mobile logo URL.
    pub mobile_img_url: String,
    /// Whether the method is usable on mobile.
    pub mobile: bool,
    /// Availability windows.
    pub availability_hours: AvailabilityHours,
}
