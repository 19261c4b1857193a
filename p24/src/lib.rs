#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Client for the [Przelewy24](https://www.przelewy24.pl) payment gateway.
//!
//! This crate builds signed requests, submits them over HTTPS, validates
//! gateway-issued callbacks against forgery, and exposes typed results for
//! each payment operation: transaction registration and verification,
//! refunds, card and BLIK charges, offline transfer registration, and
//! split-payment registration. Wire types live in the [`p24_proto`] crate,
//! re-exported here as [`proto`].
//!
//! # Overview
//!
//! A [`Przelewy24`] client is constructed once from a [`Config`] holding the
//! merchant credentials and the target [`Environment`]; it is immutable
//! afterwards and safe to share across tasks. Outbound operations sign their
//! canonical field set with SHA-384 over the shared CRC key; inbound
//! notifications are verified locally by recomputing the same digest.
//!
//! ```no_run
//! use p24::{Config, Environment, Przelewy24};
//! use p24::proto::{Currency, Order};
//!
//! # async fn run() -> Result<(), p24::Error> {
//! let client = Przelewy24::new(
//!     Config::new(12345, "api-key", "crc-key").with_environment(Environment::Sandbox),
//! );
//!
//! let order = Order::new(
//!     "order-1",
//!     1000,
//!     Currency::Pln,
//!     "Order #1",
//!     "payer@example.com",
//!     "https://shop.example/return",
//! );
//!
//! let transaction = client.register_transaction(&order).await?;
//! // Redirect the payer to transaction.link, then wait for the
//! // notification and call client.verify_transaction(..).
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] — The [`Przelewy24`] client and its operations
//! - [`config`] — Credentials, environment selection, client options
//! - [`endpoints`] — Gateway base URLs and endpoint paths
//! - [`error`] — The unified [`Error`] type
//! - [`ips`] — Gateway notification source address allow-list
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of gateway calls

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod ips;
mod notify;
mod sign;

pub use client::{PaymentMethodsQuery, Przelewy24};
pub use config::{Config, Environment};
pub use error::Error;
pub use ips::is_valid_ip;
pub use p24_proto as proto;
