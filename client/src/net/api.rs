//! REST API helpers for the MENTORA backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are decoded regardless of HTTP status, so a `{"success": false}`
//! reply reaches the caller as data. Only bodies that fail to decode become
//! [`ApiError::Status`] (non-2xx) or [`ApiError::Decode`] (2xx).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ChatReply, ChatRequest, LoginRequest, LoginResponse, ProfileResponse, ProfileSubmission, RespondRequest,
    RespondResponse, ScenariosResponse, StartScenarioRequest, StartScenarioResponse,
};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const PROFILE_ENDPOINT: &str = "/api/submit-profile";
pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const SCENARIOS_ENDPOINT: &str = "/api/communication/scenarios";
pub const START_SCENARIO_ENDPOINT: &str = "/api/communication/start";
pub const RESPOND_ENDPOINT: &str = "/api/communication/respond";

/// Transport-level failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status with an undecodable body.
    #[error("request failed: {0}")]
    Status(u16),
    /// 2xx status with an undecodable body.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No browser environment (SSR or native build).
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_decode_failure(status: u16, ok: bool, detail: String) -> ApiError {
    if ok { ApiError::Decode(detail) } else { ApiError::Status(status) }
}

/// `POST /api/login`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_json(LOGIN_ENDPOINT, req).await
}

/// `POST /api/submit-profile`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn submit_profile(form: &ProfileSubmission) -> Result<ProfileResponse, ApiError> {
    post_json(PROFILE_ENDPOINT, form).await
}

/// `POST /api/chat`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn send_chat(req: &ChatRequest) -> Result<ChatReply, ApiError> {
    post_json(CHAT_ENDPOINT, req).await
}

/// `GET /api/communication/scenarios`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn fetch_scenarios() -> Result<ScenariosResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SCENARIOS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/communication/start`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn start_scenario(req: &StartScenarioRequest) -> Result<StartScenarioResponse, ApiError> {
    post_json(START_SCENARIO_ENDPOINT, req).await
}

/// `POST /api/communication/respond`.
///
/// # Errors
///
/// Returns [`ApiError`] when the call fails in transport or decoding.
pub async fn respond_to_scenario(req: &RespondRequest) -> Result<RespondResponse, ApiError> {
    post_json(RESPOND_ENDPOINT, req).await
}

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: &gloo_net::http::Response) -> Result<T, ApiError> {
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(e) => {
            log::warn!("{} {}: undecodable body: {e}", resp.status(), resp.url());
            Err(classify_decode_failure(resp.status(), resp.ok(), e.to_string()))
        }
    }
}
