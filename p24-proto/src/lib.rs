//! Wire format types for the Przelewy24 payment gateway.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the Przelewy24 REST API: the success/error response envelope, order and
//! transaction shapes, inbound notification payloads, refunds, card and BLIK
//! charge types, and payment-method metadata. It has minimal dependencies
//! (only `serde` and `serde_json`) and is intended to be the shared wire
//! vocabulary for the whole stack; the signing and transport logic lives in
//! the `p24` crate.
//!
//! # Modules
//!
//! - [`responses`] — The `{data}` / `{error, code}` response envelope
//! - [`order`] — Payment orders, created transactions, transaction details
//! - [`verify`] — Verification requests and transaction notifications
//! - [`refund`] — Refund requests, per-item outcomes, refund history
//! - [`card`] — Card charges and card payment notifications
//! - [`blik`] — BLIK charges, aliases, and BLIK notifications
//! - [`methods`] — Payment method listings
//! - [`enums`] — Currency, language, and encoding codes

pub mod blik;
pub mod card;
pub mod enums;
pub mod methods;
pub mod order;
pub mod refund;
pub mod responses;
pub mod verify;

pub use blik::{
    AliasUpdateNotification, BlikAlias, BlikAliasKind, BlikAliasStatus, BlikChargeByAliasParams,
    BlikChargeByCodeParams, BlikChargeData, BlikPaymentNotification, BlikPaymentResult,
    RecurringParams, RecurringType,
};
pub use card::{
    Card3dsChargeData, CardChargeData, CardChargeDirectParams, CardChargeOutcome,
    CardFailureNotification, CardInfo, CardPaymentNotification, CardSuccessNotification,
};
pub use enums::{Currency, Encoding, Language};
pub use methods::{AvailabilityHours, PaymentMethod};
pub use order::{
    OfflineTransaction, Order, RegisteredOrder, SplitPaymentDetails, SplitPaymentOrder,
    Transaction, TransactionDetails,
};
pub use refund::{RefundItem, RefundRequest, RefundResult, RefundsCollection, TransactionWithRefunds};
pub use responses::{Envelope, GatewayFault};
pub use verify::{TransactionNotification, Verification, VerificationStatus};

/// Status literal the gateway returns for a positively verified transaction.
pub const VERIFICATION_SUCCESS: &str = "success";
