//! Login, registration and password-reset request/response bodies.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_name: String,
}

/// Registration request. `reference` carries the referral code of the
/// inviting user when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub device_name: String,
}

/// Login/registration success carries a fresh bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Request a password-reset code by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetCodeRequest {
    pub email: String,
}

/// Submit the emailed reset code together with the new password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetSubmitRequest {
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Confirm the OTP the telegram bot sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramOtpRequest {
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_empty_reference() {
        let request = RegisterRequest {
            firstname: "A".to_string(),
            lastname: "B".to_string(),
            email: "a@b.c".to_string(),
            phone: "123".to_string(),
            country: "NL".to_string(),
            password: "secret".to_string(),
            password_confirmation: "secret".to_string(),
            reference: None,
            device_name: "web".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("reference"));
    }

    #[test]
    fn test_auth_response_without_token() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!response.success);
        assert!(response.token.is_none());
    }
}
