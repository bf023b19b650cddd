use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, LoginResponse, UserResponse},
    config,
    utils::storage,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn auth_headers() -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        let token = stored_token().ok_or_else(|| ApiError::unauthorized("No session token"))?;
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    /// Bearer header when a session token exists, empty otherwise. Read-only
    /// endpoints with public variants use this instead of `auth_headers`.
    pub(crate) fn optional_auth_headers() -> header::HeaderMap {
        Self::auth_headers().unwrap_or_default()
    }

    /// Executes a request without the 401 hook. Used by login/register where
    /// a rejection must not disturb an existing session.
    pub(crate) async fn send_public(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            return responder.respond(&request).map(ApiResponse::Mock);
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        Ok(ApiResponse::Http(response))
    }

    /// Executes an authenticated request. A 401 clears the persisted session
    /// and, in the browser, redirects to the login page.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = self.send_public(builder).await?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn expect_json<T: DeserializeOwned>(
        response: ApiResponse,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            let value = response.json_value().await?;
            serde_json::from_value(value)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    pub(crate) async fn expect_unit(response: ApiResponse) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn error_from(status: StatusCode, response: ApiResponse) -> ApiError {
        if let Ok(value) = response.json_value().await {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .or_else(|| value.get("message").and_then(Value::as_str));
            if let Some(message) = message {
                return ApiError {
                    error: message.to_string(),
                    code: value
                        .get("code")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .or_else(|| Some(code_for_status(status).to_string())),
                    details: value.get("details").cloned(),
                };
            }
        }
        match status {
            StatusCode::UNAUTHORIZED => ApiError::unauthorized("Authentication required"),
            StatusCode::NOT_FOUND => ApiError::not_found("Resource not found"),
            s if s.is_server_error() => ApiError::server(format!("Server error ({})", s.as_u16())),
            s => ApiError::unknown(format!("Request failed ({})", s.as_u16())),
        }
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            clear_session();
            #[cfg(target_arch = "wasm32")]
            redirect_to_login_if_needed();
        }
    }
}

fn code_for_status(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "VALIDATION",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        s if s.is_server_error() => "SERVER",
        _ => "UNKNOWN",
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

pub(crate) enum ApiResponse {
    Http(reqwest::Response),
    #[cfg(all(test, not(target_arch = "wasm32")))]
    Mock(MockResponse),
}

impl ApiResponse {
    fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Http(response) => response.status(),
            #[cfg(all(test, not(target_arch = "wasm32")))]
            ApiResponse::Mock(mock) => {
                StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    async fn json_value(self) -> Result<Value, ApiError> {
        match self {
            ApiResponse::Http(response) => response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e))),
            #[cfg(all(test, not(target_arch = "wasm32")))]
            ApiResponse::Mock(mock) => Ok(mock.body),
        }
    }
}

pub fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    storage::set_item(storage::TOKEN_KEY, &response.token).map_err(ApiError::unknown)?;
    let user_json = serde_json::to_string(&response.user)
        .map_err(|_| ApiError::unknown("Failed to serialize user profile"))?;
    storage::set_item(storage::USER_KEY, &user_json).map_err(ApiError::unknown)?;
    Ok(())
}

pub fn clear_session() {
    storage::remove_item(storage::TOKEN_KEY);
    storage::remove_item(storage::USER_KEY);
}

pub fn stored_token() -> Option<String> {
    storage::get_item(storage::TOKEN_KEY)
}

pub fn stored_user() -> Option<UserResponse> {
    let raw = storage::get_item(storage::USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Reads the `exp` claim from a JWT without verifying its signature.
pub fn decode_exp(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.get("exp").and_then(Value::as_i64)
}

/// A token without a readable `exp` claim is never considered fresh.
pub fn token_is_fresh(token: &str, now: chrono::DateTime<chrono::Utc>) -> bool {
    match decode_exp(token) {
        Some(exp) => now.timestamp() < exp,
        None => false,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn token_with_payload(payload: serde_json::Value) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("header.{}.signature", encoded)
    }

    #[test]
    fn decode_exp_reads_claim() {
        let token = token_with_payload(serde_json::json!({ "exp": 1_900_000_000 }));
        assert_eq!(decode_exp(&token), Some(1_900_000_000));
    }

    #[test]
    fn decode_exp_rejects_malformed_tokens() {
        assert!(decode_exp("not-a-jwt").is_none());
        assert!(decode_exp("header.%%%.sig").is_none());
        let token = token_with_payload(serde_json::json!({ "sub": "42" }));
        assert!(decode_exp(&token).is_none());
    }

    #[test]
    fn token_freshness_compares_against_now() {
        let now = Utc.timestamp_opt(1_000_000, 0).unwrap();
        let fresh = token_with_payload(serde_json::json!({ "exp": 1_000_001 }));
        let expired = token_with_payload(serde_json::json!({ "exp": 1_000_000 }));
        assert!(token_is_fresh(&fresh, now));
        assert!(!token_is_fresh(&expired, now));
        assert!(!token_is_fresh("garbage", now));
    }

    #[test]
    fn status_codes_map_to_error_taxonomy() {
        assert_eq!(code_for_status(StatusCode::BAD_REQUEST), "VALIDATION");
        assert_eq!(code_for_status(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(code_for_status(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(code_for_status(StatusCode::INTERNAL_SERVER_ERROR), "SERVER");
        assert_eq!(code_for_status(StatusCode::CONFLICT), "UNKNOWN");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::types::Role;

    fn sample_login_response() -> LoginResponse {
        LoginResponse {
            token: "a.b.c".into(),
            token_type: Some("Bearer".into()),
            user: UserResponse {
                id: 1,
                first_name: "Jean".into(),
                last_name: "Dupont".into(),
                email: "jean@example.com".into(),
                role: Role::User,
            },
        }
    }

    #[test]
    fn persist_and_restore_session_round_trip() {
        persist_session(&sample_login_response()).unwrap();
        assert_eq!(stored_token().as_deref(), Some("a.b.c"));
        let user = stored_user().unwrap();
        assert_eq!(user.email, "jean@example.com");

        clear_session();
        assert!(stored_token().is_none());
        assert!(stored_user().is_none());
    }

    #[test]
    fn clear_session_is_idempotent() {
        clear_session();
        clear_session();
        assert!(stored_token().is_none());
    }

    #[test]
    fn auth_headers_require_a_token() {
        clear_session();
        let err = ApiClient::auth_headers().unwrap_err();
        assert!(err.is_unauthorized());

        persist_session(&sample_login_response()).unwrap();
        let headers = ApiClient::auth_headers().unwrap();
        assert_eq!(
            headers.get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer a.b.c"
        );
        clear_session();
    }
}
