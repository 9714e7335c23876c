//! Typed wrappers for every backend endpoint the client consumes.

use serde_json::Value;
use shared::{
    ApiEnvelope, Ask, AuthResponse, Bid, DashboardData, Investment, LoginRequest, Paginated,
    PlaceAskRequest, PlaceBidRequest, Plan, Referral, RegisterRequest, ResetCodeRequest,
    ResetSubmitRequest, SystemConfig, TelegramOtpRequest, Transaction,
};

use crate::api::client;
use crate::api::error::Result;

// ---- public (no bearer token) ----

pub async fn login(request: &LoginRequest) -> Result<AuthResponse> {
    client::post("login", request).await
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse> {
    client::post("register", request).await
}

pub async fn system_config() -> Result<ApiEnvelope<SystemConfig>> {
    client::get("system-config").await
}

pub async fn reset_password_code(email: &str) -> Result<ApiEnvelope<Value>> {
    let request = ResetCodeRequest {
        email: email.to_string(),
    };
    client::post("reset_password_code", &request).await
}

pub async fn reset_password_submit(request: &ResetSubmitRequest) -> Result<ApiEnvelope<Value>> {
    client::post("reset_password_code_submit", request).await
}

// ---- session gate (explicit token, no expiry funnel: the gate owns the
// failure transition itself) ----

pub async fn dashboard(token: &str) -> Result<ApiEnvelope<DashboardData>> {
    client::get_authed("dashboard", token).await
}

// ---- authenticated page traffic ----

pub async fn request_telegram_otp() -> Result<ApiEnvelope<Value>> {
    client::post_session("verify-telegram", &Value::Null).await
}

pub async fn submit_telegram_otp(otp: &str) -> Result<ApiEnvelope<Value>> {
    let request = TelegramOtpRequest {
        otp: otp.to_string(),
    };
    client::post_session("verify-telegram-otp", &request).await
}

pub async fn bids(page: u32) -> Result<ApiEnvelope<Paginated<Bid>>> {
    client::get_session(&format!("bids?page={page}")).await
}

pub async fn asks(page: u32) -> Result<ApiEnvelope<Paginated<Ask>>> {
    client::get_session(&format!("asks?page={page}")).await
}

pub async fn available_bids(page: u32) -> Result<ApiEnvelope<Paginated<Bid>>> {
    client::get_session(&format!("available-bids?page={page}")).await
}

pub async fn place_bid(request: &PlaceBidRequest) -> Result<ApiEnvelope<Value>> {
    client::post_session("bid", request).await
}

pub async fn place_ask(request: &PlaceAskRequest) -> Result<ApiEnvelope<Value>> {
    client::post_session("ask", request).await
}

pub async fn transactions(page: u32) -> Result<ApiEnvelope<Paginated<Transaction>>> {
    client::get_session(&format!("transactions?page={page}")).await
}

pub async fn investments() -> Result<ApiEnvelope<Vec<Investment>>> {
    client::get_session("investments").await
}

pub async fn referrals() -> Result<ApiEnvelope<Vec<Referral>>> {
    client::get_session("referrals").await
}

pub async fn plans() -> Result<ApiEnvelope<Vec<Plan>>> {
    client::get_session("plans").await
}
