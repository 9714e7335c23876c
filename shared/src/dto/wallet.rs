//! Wallet history, investments, plans and referrals.

use crate::amount::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One wallet ledger entry. `trx_type` is `"+"` for credits and `"-"` for
/// debits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    #[serde(default)]
    pub trx: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub trx_type: String,
    #[serde(default)]
    pub post_balance: Amount,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.trx_type == "+"
    }
}

/// An investment plan offered by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub minimum: Amount,
    #[serde(default)]
    pub maximum: Amount,
    /// Interest per payout period, in percent.
    #[serde(default)]
    pub interest: Amount,
    #[serde(default)]
    pub duration_days: u32,
}

/// A running or finished investment of the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: u64,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub paid: Amount,
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user referred by the current user, with the commission earned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Referral {
    pub id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub bonus: Amount,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_direction() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":1,"trx":"TRX123","amount":"5.00","trx_type":"+","post_balance":"105.00","details":"Referral bonus"}"#,
        )
        .unwrap();
        assert!(tx.is_credit());
        assert_eq!(tx.post_balance.as_str(), "105.00");
    }

    #[test]
    fn test_plan_record() {
        let plan: Plan = serde_json::from_str(
            r#"{"id":2,"name":"Silver","minimum":"100","maximum":"999.99","interest":"1.5","duration_days":30}"#,
        )
        .unwrap();
        assert_eq!(plan.name, "Silver");
        assert_eq!(plan.interest.as_str(), "1.5");
        assert_eq!(plan.duration_days, 30);
    }
}
