//! Application constants.

/// Base URL of the backend REST API. Overridable at build time via the
/// `TRADE_API_URL` environment variable.
pub fn api_base() -> &'static str {
    option_env!("TRADE_API_URL").unwrap_or("http://127.0.0.1:8000/api")
}

/// Storage key the bearer token lives under, in whichever storage area the
/// login's remember-me flag selected.
pub const TOKEN_STORAGE_KEY: &str = "tetherdesk.token";

/// Device name reported to the backend when issuing tokens.
pub const DEVICE_NAME: &str = "web";

/// Sentinel `message` value on the dashboard response that signals the
/// account still has to complete telegram verification. Must match the
/// backend verbatim.
pub const TELEGRAM_VERIFY_SENTINEL: &str = "Please verify your telegram account";

/// How long a toast notification stays on screen.
pub const TOAST_DISMISS_MS: u32 = 5_000;

/// Client-side route paths.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const MAINTENANCE: &str = "/maintenance";
    pub const VERIFY_TELEGRAM: &str = "/verify-telegram";
    pub const DASHBOARD: &str = "/dashboard";
    pub const BIDS: &str = "/bids";
    pub const ASKS: &str = "/asks";
    pub const TRANSACTIONS: &str = "/transactions";
    pub const INVESTMENTS: &str = "/investments";
    pub const REFERRALS: &str = "/referrals";
    pub const PLANS: &str = "/plans";
}
