//! Inbound notification verification.
//!
//! The gateway signs every transaction and card notification over that
//! notification's full field set, minus the `sign` field itself, with the
//! CRC key appended. Verification recomputes the digest locally and
//! compares it to the received one; no network call is involved, so these
//! checks are safe to run inside any number of concurrent webhook
//! handlers. BLIK alias-update and BLIK payment notifications define no
//! signature and are covered only by transport-level authentication (and,
//! as a coarse second line, the [`ips`](crate::ips) allow-list).

use p24_proto::{
    CardFailureNotification, CardPaymentNotification, CardSuccessNotification, Currency,
    TransactionNotification,
};
use serde::Serialize;

use crate::client::Przelewy24;
use crate::sign;

/// Canonical field set of a transaction notification: the received fields
/// in wire order, `sign` excluded, `crc` appended.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionNotificationSignPayload<'a> {
    merchant_id: u32,
    pos_id: u32,
    session_id: &'a str,
    amount: u64,
    origin_amount: u64,
    currency: Currency,
    order_id: u64,
    method_id: u32,
    statement: &'a str,
    crc: &'a str,
}

/// Canonical field set of a successful card notification.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardSuccessSignPayload<'a> {
    amount: u64,
    #[serde(rename = "3ds")]
    three_ds: bool,
    method: u32,
    ref_id: &'a str,
    order_id: u64,
    session_id: &'a str,
    bin: u32,
    #[serde(rename = "maskedCCNumber")]
    masked_cc_number: &'a str,
    cc_exp: &'a str,
    hash: &'a str,
    card_country: &'a str,
    risk: u32,
    #[serde(rename = "liabilityshift")]
    liability_shift: bool,
    crc: &'a str,
}

/// Canonical field set of a failed card notification.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardFailureSignPayload<'a> {
    amount: u64,
    #[serde(rename = "3ds")]
    three_ds: bool,
    method: u32,
    order_id: u64,
    session_id: &'a str,
    error_code: &'a str,
    error_message: &'a str,
    crc: &'a str,
}

impl Przelewy24 {
    /// Verifies the authenticity of a transaction notification.
    ///
    /// Recomputes the signature over the notification's canonical field set
    /// with this client's CRC key and compares it byte-for-byte against the
    /// received `sign`. Returns `true` iff they are equal; a mismatch is a
    /// legitimate negative verdict, not an error.
    ///
    /// Run this before trusting any payment-completion callback.
    #[must_use]
    pub fn verify_transaction_notification(&self, notification: &TransactionNotification) -> bool {
        let payload = TransactionNotificationSignPayload {
            merchant_id: notification.merchant_id,
            pos_id: notification.pos_id,
            session_id: &notification.session_id,
            amount: notification.amount,
            origin_amount: notification.origin_amount,
            currency: notification.currency,
            order_id: notification.order_id,
            method_id: notification.method_id,
            statement: &notification.statement,
            crc: self.crc_key(),
        };
        sign::digest_of(&payload).is_ok_and(|expected| expected == notification.sign)
    }

    /// Verifies the authenticity of a card payment notification.
    ///
    /// The success and failure shapes carry different field sets; each is
    /// hashed over its own canonical set with the same algorithm.
    #[must_use]
    pub fn verify_card_notification(&self, notification: &CardPaymentNotification) -> bool {
        let expected = match notification {
            CardPaymentNotification::Success(n) => self.card_success_digest(n),
            CardPaymentNotification::Failure(n) => self.card_failure_digest(n),
        };
        expected.is_ok_and(|expected| expected == notification.sign())
    }

    fn card_success_digest(
        &self,
        notification: &CardSuccessNotification,
    ) -> Result<String, serde_json::Error> {
        sign::digest_of(&CardSuccessSignPayload {
            amount: notification.amount,
            three_ds: notification.three_ds,
            method: notification.method,
            ref_id: &notification.ref_id,
            order_id: notification.order_id,
            session_id: &notification.session_id,
            bin: notification.bin,
            masked_cc_number: &notification.masked_cc_number,
            cc_exp: &notification.cc_exp,
            hash: &notification.hash,
            card_country: &notification.card_country,
            risk: notification.risk,
            liability_shift: notification.liability_shift,
            crc: self.crc_key(),
        })
    }

    fn card_failure_digest(
        &self,
        notification: &CardFailureNotification,
    ) -> Result<String, serde_json::Error> {
        sign::digest_of(&CardFailureSignPayload {
            amount: notification.amount,
            three_ds: notification.three_ds,
            method: notification.method,
            order_id: notification.order_id,
            session_id: &notification.session_id,
            error_code: &notification.error_code,
            error_message: &notification.error_message,
            crc: self.crc_key(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sign::sha384_hex;

    const CRC: &str = "test-crc";

    fn client() -> Przelewy24 {
        Przelewy24::new(Config::new(100, "test-api-key", CRC))
    }

    fn signed_notification() -> TransactionNotification {
        // The gateway hashes the notification fields in wire order with the
        // CRC key appended; spelled out by hand here so the fixture does
        // not depend on the code under test.
        let canonical = format!(
            r#"{{"merchantId":100,"posId":100,"sessionId":"s-1","amount":1000,"originAmount":1000,"currency":"PLN","orderId":300,"methodId":25,"statement":"p24-A1","crc":"{CRC}"}}"#
        );
        TransactionNotification {
            merchant_id: 100,
            pos_id: 100,
            session_id: "s-1".into(),
            amount: 1000,
            origin_amount: 1000,
            currency: Currency::Pln,
            order_id: 300,
            method_id: 25,
            statement: "p24-A1".into(),
            sign: sha384_hex(&canonical),
        }
    }

    #[test]
    fn accepts_a_correctly_signed_notification() {
        assert!(client().verify_transaction_notification(&signed_notification()));
    }

    #[test]
    fn rejects_a_tampered_amount() {
        let mut notification = signed_notification();
        notification.amount = 1;
        assert!(!client().verify_transaction_notification(&notification));
    }

    #[test]
    fn rejects_a_tampered_order_id() {
        let mut notification = signed_notification();
        notification.order_id = 301;
        assert!(!client().verify_transaction_notification(&notification));
    }

    #[test]
    fn rejects_a_forged_signature() {
        let mut notification = signed_notification();
        notification.sign = sha384_hex("forged");
        assert!(!client().verify_transaction_notification(&notification));
    }

    #[test]
    fn signature_comparison_is_case_sensitive() {
        let mut notification = signed_notification();
        notification.sign = notification.sign.to_uppercase();
        assert!(!client().verify_transaction_notification(&notification));
    }

    #[test]
    fn rejects_a_notification_signed_with_another_secret() {
        let notification = signed_notification();
        let other = Przelewy24::new(Config::new(100, "test-api-key", "other-crc"));
        assert!(!other.verify_transaction_notification(&notification));
    }

    #[test]
    fn accepts_a_signed_card_success_notification() {
        let canonical = format!(
            r#"{{"amount":1000,"3ds":true,"method":241,"refId":"ref-1","orderId":42,"sessionId":"s-1","bin":411111,"maskedCCNumber":"4111xxxxxxxx1111","ccExp":"1227","hash":"cardhash","cardCountry":"PL","risk":10,"liabilityshift":true,"crc":"{CRC}"}}"#
        );
        let notification = CardPaymentNotification::Success(CardSuccessNotification {
            amount: 1000,
            three_ds: true,
            method: 241,
            ref_id: "ref-1".into(),
            order_id: 42,
            session_id: "s-1".into(),
            bin: 411_111,
            masked_cc_number: "4111xxxxxxxx1111".into(),
            cc_exp: "1227".into(),
            hash: "cardhash".into(),
            card_country: "PL".into(),
            risk: 10,
            liability_shift: true,
            sign: sha384_hex(&canonical),
        });
        assert!(client().verify_card_notification(&notification));
    }

    #[test]
    fn accepts_a_signed_card_failure_notification() {
        let canonical = format!(
            r#"{{"amount":1000,"3ds":false,"method":241,"orderId":42,"sessionId":"s-1","errorCode":"05","errorMessage":"Do not honour","crc":"{CRC}"}}"#
        );
        let notification = CardPaymentNotification::Failure(CardFailureNotification {
            amount: 1000,
            three_ds: false,
            method: 241,
            order_id: 42,
            session_id: "s-1".into(),
            error_code: "05".into(),
            error_message: "Do not honour".into(),
            sign: sha384_hex(&canonical),
        });
        assert!(client().verify_card_notification(&notification));
    }

    #[test]
    fn rejects_a_tampered_card_notification() {
        let canonical = format!(
            r#"{{"amount":1000,"3ds":false,"method":241,"orderId":42,"sessionId":"s-1","errorCode":"05","errorMessage":"Do not honour","crc":"{CRC}"}}"#
        );
        let mut inner = CardFailureNotification {
            amount: 1000,
            three_ds: false,
            method: 241,
            order_id: 42,
            session_id: "s-1".into(),
            error_code: "05".into(),
            error_message: "Do not honour".into(),
            sign: sha384_hex(&canonical),
        };
        inner.amount = 999_999;
        assert!(!client().verify_card_notification(&CardPaymentNotification::Failure(inner)));
    }
}
