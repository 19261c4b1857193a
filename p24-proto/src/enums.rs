//! Closed code sets used across gateway requests.

use serde::{Deserialize, Serialize};

/// Currencies accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Polish złoty.
    #[serde(rename = "PLN")]
    Pln,
    /// Euro.
    #[serde(rename = "EUR")]
    Eur,
    /// Pound sterling.
    #[serde(rename = "GBP")]
    Gbp,
    /// Czech koruna.
    #[serde(rename = "CZK")]
    Czk,
}

impl Currency {
    /// Returns the ISO 4217 code as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pln => "PLN",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Czk => "CZK",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment page languages supported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Polish.
    Pl,
    /// English.
    En,
    /// German.
    De,
    /// Spanish.
    Es,
    /// Italian.
    It,
}

impl Language {
    /// Returns the two-letter code as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::It => "it",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character encodings accepted for order text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// ISO-8859-2 (Latin-2).
    #[serde(rename = "ISO-8859-2")]
    Iso8859_2,
    /// UTF-8.
    #[serde(rename = "UTF-8")]
    Utf8,
    /// Windows-1250.
    #[serde(rename = "Windows-1250")]
    Windows1250,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_serializes_as_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Pln).unwrap(), r#""PLN""#);
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), r#""EUR""#);
    }

    #[test]
    fn language_round_trips() {
        let lang: Language = serde_json::from_str(r#""pl""#).unwrap();
        assert_eq!(lang, Language::Pl);
        assert_eq!(lang.to_string(), "pl");
    }
}
