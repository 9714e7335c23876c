//! Serde helpers shared across the DTO modules.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Deserialize the server's integer-coded flags (`0`/`1`) into `bool`.
///
/// Some deployments already send real booleans for the same fields, so both
/// encodings are accepted.
pub fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("0, 1 or a boolean")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Serde default for flags the server treats as enabled when absent.
pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "bool_from_int")]
        verified: bool,
    }

    #[test]
    fn test_integer_flags() {
        let flags: Flags = serde_json::from_str(r#"{"verified":1}"#).unwrap();
        assert!(flags.verified);

        let flags: Flags = serde_json::from_str(r#"{"verified":0}"#).unwrap();
        assert!(!flags.verified);
    }

    #[test]
    fn test_native_booleans_still_accepted() {
        let flags: Flags = serde_json::from_str(r#"{"verified":true}"#).unwrap();
        assert!(flags.verified);
    }
}
