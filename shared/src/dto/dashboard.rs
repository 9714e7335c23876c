//! The dashboard payload, the primary input of the session gate.

use crate::amount::Amount;
use crate::dto::trade::{Ask, Bid};
use crate::dto::user::User;
use serde::{Deserialize, Serialize};

/// Payload of the authenticated `dashboard` endpoint. The derived lists are
/// bounded server-side (most recent entries only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub user: User,
    #[serde(default, rename = "recentBids")]
    pub recent_bids: Vec<Bid>,
    #[serde(default, rename = "recentAsks")]
    pub recent_asks: Vec<Ask>,
    #[serde(default, rename = "runningInvest")]
    pub running_invest: Amount,
    #[serde(default, rename = "siteBot")]
    pub site_bot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_dashboard_payload() {
        let data: DashboardData = serde_json::from_str(
            r#"{"user":{"id":1,"firstname":"A"},"recentBids":[],"recentAsks":[],"runningInvest":0}"#,
        )
        .unwrap();
        assert_eq!(data.user.id, 1);
        assert_eq!(data.user.firstname, "A");
        assert!(data.recent_bids.is_empty());
        assert!(data.recent_asks.is_empty());
        assert_eq!(data.running_invest.as_str(), "0");
        assert_eq!(data.site_bot, "");
    }

    #[test]
    fn test_dashboard_with_recent_trades() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "user": {"id":2,"firstname":"B","balance":"50.00"},
                "recentBids": [{"id":1,"amount":"10","rate":"1.00","status":0}],
                "recentAsks": [{"id":2,"amount":"20","rate":"1.01","status":3}],
                "runningInvest": "300.000000",
                "siteBot": "tetherdesk_bot"
            }"#,
        )
        .unwrap();
        assert_eq!(data.recent_bids.len(), 1);
        assert_eq!(data.recent_asks[0].status, 3);
        assert_eq!(data.running_invest.as_str(), "300.000000");
        assert_eq!(data.site_bot, "tetherdesk_bot");
    }
}
