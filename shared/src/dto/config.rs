//! Platform-wide system configuration.

use crate::utils::{bool_from_int, default_true};
use serde::{Deserialize, Serialize};

/// Payload of the `system-config` endpoint. Every field is optional on the
/// wire; defaults keep a sparse response usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SystemConfig {
    #[serde(default)]
    pub sitename: String,
    /// Whether logging in is currently enabled (feature flag).
    #[serde(default = "default_true", deserialize_with = "bool_from_int")]
    pub login: bool,
    /// Whether the platform is in maintenance mode.
    #[serde(default, deserialize_with = "bool_from_int")]
    pub maintain: bool,
    /// Identifier of the platform's telegram bot.
    #[serde(default)]
    pub telegram: String,
    #[serde(default)]
    pub telegram_channel: String,
    #[serde(default)]
    pub telegram_group: String,
    /// Daily trading-window open time, e.g. "10:00".
    #[serde(default)]
    pub opening_time: String,
    /// Daily trading-window close time.
    #[serde(default)]
    pub closing_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_config() {
        let config: SystemConfig = serde_json::from_str(
            r#"{"maintain":0,"telegram_channel":"x","telegram_group":"y","opening_time":"10:00","closing_time":"10:30"}"#,
        )
        .unwrap();
        assert!(!config.maintain);
        assert!(config.login, "login defaults to enabled when absent");
        assert_eq!(config.telegram_channel, "x");
        assert_eq!(config.closing_time, "10:30");
    }

    #[test]
    fn test_maintenance_flag() {
        let config: SystemConfig =
            serde_json::from_str(r#"{"sitename":"TetherDesk","login":1,"maintain":1}"#).unwrap();
        assert!(config.maintain);
        assert_eq!(config.sitename, "TetherDesk");
    }
}
