//! The unified client error type.

use p24_proto::GatewayFault;

/// Errors produced by gateway operations.
///
/// A [`Gateway`](Self::Gateway) error carries the gateway's own message and
/// numeric code verbatim; the other variants mean the exchange itself
/// failed and no gateway code exists. [`Error::gateway_code`] is the
/// discriminator callers can use without matching variants.
///
/// Negative verification outcomes are not errors: verification and
/// notification checks return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The gateway returned an error envelope.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayFault),

    /// The HTTP exchange failed (network, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body matched neither envelope shape.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the gateway error code, if the gateway produced one.
    #[must_use]
    pub const fn gateway_code(&self) -> Option<u16> {
        match self {
            Self::Gateway(fault) => Some(fault.code),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
