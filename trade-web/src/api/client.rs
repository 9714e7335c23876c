//! Thin `gloo-net` wrapper with centralized unauthorized-response handling.
//!
//! All authenticated page traffic goes through [`get_session`] /
//! [`post_session`], so a bearer token the server no longer accepts triggers
//! the same session-expiry transition everywhere instead of failing silently
//! per page.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, Result};
use crate::session::token::token_store;
use crate::utils::constants::{self, paths};

/// Join the configured API base with an endpoint path.
pub fn api_url(path: &str) -> String {
    format!(
        "{}/{}",
        constants::api_base().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if let Some(err) = status_error(response.status()) {
        return Err(err);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Statuses whose body carries no usable envelope. Other 4xx responses still
/// decode, so failure envelopes keep their server-side message.
fn status_error(status: u16) -> Option<ApiError> {
    match status {
        // 419 is the backend's "token expired" variant of unauthorized.
        401 | 419 => Some(ApiError::Unauthorized),
        500..=599 => Some(ApiError::Api(format!("server error (status {status})"))),
        _ => None,
    }
}

/// Unauthenticated GET.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::from)?;
    decode(response).await
}

/// GET with an explicit bearer token. The session gate uses this directly;
/// pages go through [`get_session`].
pub async fn get_authed<T: DeserializeOwned>(path: &str, token: &str) -> Result<T> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(ApiError::from)?;
    decode(response).await
}

/// Unauthenticated POST with a JSON body.
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(ApiError::from)?
        .send()
        .await
        .map_err(ApiError::from)?;
    decode(response).await
}

/// POST with an explicit bearer token.
pub async fn post_authed<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {token}"))
        .json(body)
        .map_err(ApiError::from)?
        .send()
        .await
        .map_err(ApiError::from)?;
    decode(response).await
}

/// Authenticated GET for page traffic. Reads the stored token and funnels
/// unauthorized responses through [`expire_session`].
pub async fn get_session<T: DeserializeOwned>(path: &str) -> Result<T> {
    let Some(token) = token_store().get() else {
        expire_session();
        return Err(ApiError::Unauthorized);
    };
    match get_authed(path, &token).await {
        Err(ApiError::Unauthorized) => {
            expire_session();
            Err(ApiError::Unauthorized)
        }
        other => other,
    }
}

/// Authenticated POST for page traffic, same expiry funnel as [`get_session`].
pub async fn post_session<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let Some(token) = token_store().get() else {
        expire_session();
        return Err(ApiError::Unauthorized);
    };
    match post_authed(path, body, &token).await {
        Err(ApiError::Unauthorized) => {
            expire_session();
            Err(ApiError::Unauthorized)
        }
        other => other,
    }
}

/// Drop the stored token and send the user back to the login screen.
fn expire_session() {
    log::warn!("session expired, clearing token and redirecting to login");
    token_store().clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(paths::LOGIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_cleanly() {
        let base = constants::api_base().trim_end_matches('/');
        assert_eq!(api_url("dashboard"), format!("{base}/dashboard"));
        assert_eq!(api_url("/dashboard"), format!("{base}/dashboard"));
    }

    #[test]
    fn test_status_error_classification() {
        assert!(status_error(200).is_none());
        assert!(matches!(status_error(401), Some(ApiError::Unauthorized)));
        assert!(matches!(status_error(419), Some(ApiError::Unauthorized)));
        // Failure envelopes (e.g. validation errors) must still decode.
        assert!(status_error(422).is_none());
        match status_error(503) {
            Some(ApiError::Api(msg)) => assert!(msg.contains("503")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
