//! Bid/ask records and placement bodies.

use crate::amount::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle codes the backend uses for both bids and asks.
pub fn trade_status_label(status: u8) -> &'static str {
    match status {
        0 => "Pending",
        1 => "Matched",
        2 => "Paid",
        3 => "Completed",
        4 => "Cancelled",
        _ => "Unknown",
    }
}

/// A buy order placed by the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bid {
    pub id: u64,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub rate: Amount,
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A sell order placed by the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ask {
    pub id: u64,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub rate: Amount,
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST bid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceBidRequest {
    pub amount: String,
    pub rate: String,
}

/// Body of `POST ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceAskRequest {
    pub amount: String,
    pub rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_record() {
        let bid: Bid = serde_json::from_str(
            r#"{"id":9,"amount":"100.00","rate":0.998,"status":1,"created_at":"2024-03-01T10:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(bid.amount.as_str(), "100.00");
        assert_eq!(bid.rate.as_str(), "0.998");
        assert_eq!(trade_status_label(bid.status), "Matched");
        assert!(bid.created_at.is_some());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(trade_status_label(0), "Pending");
        assert_eq!(trade_status_label(3), "Completed");
        assert_eq!(trade_status_label(99), "Unknown");
    }
}
