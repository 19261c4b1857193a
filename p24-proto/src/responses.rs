//! The Przelewy24 response envelope.
//!
//! Every response body the gateway produces is either a success envelope
//! wrapping the operation payload or an error envelope carrying a message
//! and a numeric error code — never both, never neither.

use serde::{Deserialize, Serialize};

/// An error envelope returned by the gateway.
///
/// The message and code are the gateway's own and are preserved verbatim
/// for caller diagnostics.
///
/// # JSON Format
///
/// ```json
/// { "error": "Invalid amount", "code": 305 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error} (code {code})")]
pub struct GatewayFault {
    /// Human-readable error message from the gateway.
    pub error: String,
    /// Numeric gateway error code.
    pub code: u16,
}

/// A gateway response body: either `{data: T}` or `{error, code}`.
///
/// Deserialization tries the success shape first; a body that matches
/// neither shape is a deserialization error, not a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// Success envelope wrapping the operation payload.
    Data {
        /// The unwrapped payload.
        data: T,
    },
    /// Error envelope.
    Fault(GatewayFault),
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into the payload or the gateway fault.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayFault`] carried by an error envelope.
    pub fn into_result(self) -> Result<T, GatewayFault> {
        match self {
            Self::Data { data } => Ok(data),
            Self::Fault(fault) => Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_success_envelope() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"token": "t1"}}"#).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data["token"], "t1");
    }

    #[test]
    fn unwraps_error_envelope() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"error": "Invalid amount", "code": 305}"#).unwrap();
        let fault = envelope.into_result().unwrap_err();
        assert_eq!(fault.error, "Invalid amount");
        assert_eq!(fault.code, 305);
    }

    #[test]
    fn rejects_body_with_neither_shape() {
        let result: Result<Envelope<bool>, _> = serde_json::from_str(r#"{"ok": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn boolean_payloads_unwrap() {
        let envelope: Envelope<bool> = serde_json::from_str(r#"{"data": true}"#).unwrap();
        assert!(envelope.into_result().unwrap());
    }
}
