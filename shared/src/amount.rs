//! Lossless decimal currency amounts.
//!
//! The backend reports balances, earnings and trade sizes either as JSON
//! numbers or as decimal strings, depending on the column type behind the
//! endpoint. Parsing those into a float and re-serializing would silently
//! change user-visible money values, so [`Amount`] keeps the server's textual
//! representation and only converts to `f64` for display purposes.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A decimal currency value carried as the server's original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Amount(raw.into())
    }

    /// The exact textual value as received from the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Approximate numeric value, for display formatting only.
    pub fn to_f64(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.to_f64() == 0.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount("0".to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Amount(raw.to_string())
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Amount(raw)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string or a JSON number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Ok(Amount(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Ok(Amount(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        value: Amount,
    }

    #[test]
    fn test_decimal_string_is_kept_verbatim() {
        let row: Row = serde_json::from_str(r#"{"value":"123456789.123456789"}"#).unwrap();
        assert_eq!(row.value.as_str(), "123456789.123456789");
    }

    #[test]
    fn test_json_numbers_decode() {
        let row: Row = serde_json::from_str(r#"{"value":0}"#).unwrap();
        assert_eq!(row.value.as_str(), "0");

        let row: Row = serde_json::from_str(r#"{"value":10.5}"#).unwrap();
        assert_eq!(row.value.as_str(), "10.5");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Amount::new("42.10")).unwrap();
        assert_eq!(json, r#""42.10""#);
    }

    #[test]
    fn test_display_and_numeric_helpers() {
        let amount = Amount::new("1500.25");
        assert_eq!(amount.to_string(), "1500.25");
        assert_eq!(amount.to_f64(), 1500.25);
        assert!(!amount.is_zero());
        assert!(Amount::default().is_zero());
    }
}
