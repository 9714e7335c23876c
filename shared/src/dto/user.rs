//! The raw user record exactly as the backend sends it.

use crate::amount::Amount;
use crate::utils::bool_from_int;
use serde::{Deserialize, Serialize};

/// A platform user. Verification flags arrive as `0`/`1` integers and are
/// decoded to booleans; currency fields keep their exact decimal text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub refer_code: String,
    #[serde(default)]
    pub referred_by: Option<u64>,
    #[serde(default)]
    pub balance: Amount,
    #[serde(default)]
    pub earning: Amount,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub email_verified: bool,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub telegram_verified: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_user_record() {
        // The dashboard endpoint is free to omit anything but the id.
        let user: User = serde_json::from_str(r#"{"id":1,"firstname":"A"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.firstname, "A");
        assert_eq!(user.full_name(), "A");
        assert!(user.balance.is_zero());
        assert!(!user.telegram_verified);
    }

    #[test]
    fn test_full_user_record() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "firstname": "Ada",
                "lastname": "Lovelace",
                "email": "ada@example.com",
                "phone": "+3112345678",
                "country": "NL",
                "refer_code": "ADA123",
                "referred_by": 3,
                "balance": "1024.500000",
                "earning": 12.25,
                "email_verified": 1,
                "telegram_verified": 0
            }"#,
        )
        .unwrap();
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.balance.as_str(), "1024.500000");
        assert_eq!(user.earning.as_str(), "12.25");
        assert!(user.email_verified);
        assert!(!user.telegram_verified);
        assert_eq!(user.referred_by, Some(3));
    }
}
