//! Same-origin forwarding of `/api/*` to the MENTORA backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Every `/api/*` request is
//! replayed against `MENTORA_API_URL` with its method, query, body and the
//! headers the backend session depends on; the backend's status and body are
//! returned unchanged so `{"success": false}` replies reach the client as
//! data.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures are errors here. They become a 502 with a JSON
//! body in the backend's own `{success, error}` shape.

use std::time::Duration;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderName, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::ServerConfig;

static FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, ACCEPT, COOKIE];
static FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiProxy {
    http: reqwest::Client,
    base_url: String,
}

impl ApiProxy {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.clone() })
    }

    /// Backend URL for an incoming request URI, query included.
    #[must_use]
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
        format!("{}{path_and_query}", self.base_url)
    }

    /// Replay one request against the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Upstream`] when the backend cannot be reached or
    /// its body cannot be read.
    pub async fn forward(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
        let url = self.target_url(uri);
        let mut request = self.http.request(method.clone(), &url).body(body);
        for name in &FORWARDED_REQUEST_HEADERS {
            for value in headers.get_all(name) {
                request = request.header(name, value);
            }
        }

        let upstream = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend unreachable");
            ProxyError::Upstream(e.to_string())
        })?;
        let status = upstream.status();
        tracing::debug!(%method, path = uri.path(), %status, "proxied");

        let mut response = axum::http::Response::builder().status(status);
        for name in &FORWARDED_RESPONSE_HEADERS {
            for value in upstream.headers().get_all(name) {
                response = response.header(name, value);
            }
        }
        let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
        response.body(Body::from(bytes)).map_err(|e| ProxyError::Upstream(e.to_string()))
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
