//! Gateway base URLs and endpoint paths.
//!
//! All REST endpoints are relative to `{base}/api/v1`; the one exception is
//! [`TRANSACTION_REQUEST`], the payer-facing redirect path appended directly
//! to the base URL.

/// Production gateway base URL.
pub const PRODUCTION_URL: &str = "https://secure.przelewy24.pl";

/// Sandbox gateway base URL.
pub const SANDBOX_URL: &str = "https://sandbox.przelewy24.pl";

/// REST API prefix appended to the base URL.
pub const API_PATH: &str = "/api/v1";

/// Connectivity and credential probe (GET).
pub const TEST_ACCESS: &str = "/testAccess";

/// Transaction registration (POST, signed).
pub const TRANSACTION_REGISTER: &str = "/transaction/register";

/// Payer redirect path; the transaction token is appended to it.
pub const TRANSACTION_REQUEST: &str = "/trnRequest";

/// Transaction verification (PUT, signed).
pub const TRANSACTION_VERIFY: &str = "/transaction/verify";

/// Refund submission (POST, unsigned).
pub const REFUND: &str = "/transaction/refund";

/// Transaction details lookup by session id (GET, path-parameterized).
pub const TRANSACTION_DETAILS: &str = "/transaction/by/sessionId";

/// Payment methods listing by language (GET, path + query parameters).
pub const PAYMENT_METHODS: &str = "/payment/methods";

/// Offline transaction registration from a token (POST).
pub const OFFLINE_TRANSACTION: &str = "/transaction/registerOffline";

/// Split-payment transaction registration (POST).
pub const SPLIT_PAYMENT: &str = "/transaction/register/splitpayment";

/// Refund history lookup by order id (GET, path-parameterized).
pub const REFUNDS_BY_ORDER_ID: &str = "/refund/by/orderId";

/// Card charge with a 3DS challenge (POST).
pub const CARD_CHARGE_3DS: &str = "/card/chargeWith3ds";

/// Frictionless card charge (POST).
pub const CARD_CHARGE: &str = "/card/charge";

/// Direct card charge with raw card data (POST).
pub const CARD_CHARGE_DIRECT: &str = "/card/chargeDirect";

/// BLIK charge by 6-digit code (POST).
pub const BLIK_CHARGE_BY_CODE: &str = "/paymentMethod/blik/chargeByCode";

/// BLIK charge by registered alias (POST).
pub const BLIK_CHARGE_BY_ALIAS: &str = "/paymentMethod/blik/chargeByAlias";

/// BLIK alias listing by customer e-mail (GET, path-parameterized).
pub const BLIK_ALIASES: &str = "/paymentMethod/blik/aliases";

/// BLIK alias listing by e-mail for label-registered aliases (GET,
/// path-parameterized).
pub const BLIK_ALIASES_CUSTOM: &str = "/paymentMethod/blik/aliases/custom";
