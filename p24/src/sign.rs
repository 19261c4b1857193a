//! The signature engine.
//!
//! Every signed operation hashes a canonical JSON rendering of its protocol
//! field set, with the CRC key appended under the `crc` key, through
//! SHA-384. The canonical rendering is the compact `serde_json` encoding of
//! a dedicated payload struct whose field declaration order is the
//! protocol's key order; this module is the single place that rule lives,
//! shared by outbound signing and inbound notification verification. The
//! digest itself never enters its own input.

use p24_proto::Currency;
use serde::Serialize;
use sha2::{Digest, Sha384};

/// Hashes a canonical string to a lowercase hex SHA-384 digest.
pub(crate) fn sha384_hex(data: &str) -> String {
    hex::encode(Sha384::digest(data.as_bytes()))
}

/// Serializes a canonical payload and hashes it.
///
/// `serde_json::to_string` emits struct fields in declaration order with no
/// whitespace, which makes the rendering deterministic across runs.
pub(crate) fn digest_of<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    Ok(sha384_hex(&serde_json::to_string(payload)?))
}

/// Canonical field set of transaction registration.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterSignPayload<'a> {
    pub session_id: &'a str,
    pub merchant_id: u32,
    pub amount: u64,
    pub currency: Currency,
    pub crc: &'a str,
}

/// Canonical field set of transaction verification.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifySignPayload<'a> {
    pub session_id: &'a str,
    pub order_id: u64,
    pub amount: u64,
    pub currency: Currency,
    pub crc: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC: &str = "test-crc";

    fn register_payload() -> RegisterSignPayload<'static> {
        RegisterSignPayload {
            session_id: "s-1",
            merchant_id: 100,
            amount: 1000,
            currency: Currency::Pln,
            crc: CRC,
        }
    }

    #[test]
    fn digest_is_lowercase_sha384_of_canonical_json() {
        // Canonical rendering spelled out by hand, hashed against a fixed
        // vector, so a serializer change cannot slip through.
        let canonical =
            r#"{"sessionId":"s-1","merchantId":100,"amount":1000,"currency":"PLN","crc":"test-crc"}"#;
        let expected =
            "3d5129aa3769b2a7e6f4d5c11534557f95208ed7a14c5e584e61c62099710a0fa17ec22391d5d3e8af2b3ed1cf8bf1c8";
        assert_eq!(sha384_hex(canonical), expected);
        assert_eq!(digest_of(&register_payload()).unwrap(), expected);
    }

    #[test]
    fn empty_input_matches_published_sha384_vector() {
        assert_eq!(
            sha384_hex(""),
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
        );
    }

    #[test]
    fn digest_is_deterministic() {
        let first = digest_of(&register_payload()).unwrap();
        let second = digest_of(&register_payload()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn any_single_field_change_changes_the_digest() {
        let base = digest_of(&register_payload()).unwrap();

        let mut perturbed = register_payload();
        perturbed.session_id = "s-2";
        assert_ne!(digest_of(&perturbed).unwrap(), base);

        let mut perturbed = register_payload();
        perturbed.merchant_id = 101;
        assert_ne!(digest_of(&perturbed).unwrap(), base);

        let mut perturbed = register_payload();
        perturbed.amount = 1001;
        assert_ne!(digest_of(&perturbed).unwrap(), base);

        let mut perturbed = register_payload();
        perturbed.currency = Currency::Eur;
        assert_ne!(digest_of(&perturbed).unwrap(), base);

        let mut perturbed = register_payload();
        perturbed.crc = "other-crc";
        assert_ne!(digest_of(&perturbed).unwrap(), base);
    }

    #[test]
    fn verify_payload_uses_order_id_instead_of_merchant_id() {
        let verify = VerifySignPayload {
            session_id: "s-1",
            order_id: 300,
            amount: 1000,
            currency: Currency::Pln,
            crc: CRC,
        };
        let canonical =
            r#"{"sessionId":"s-1","orderId":300,"amount":1000,"currency":"PLN","crc":"test-crc"}"#;
        assert_eq!(digest_of(&verify).unwrap(), sha384_hex(canonical));
    }
}
