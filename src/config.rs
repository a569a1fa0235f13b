//! Server configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Configuration failure at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub timeouts: ProxyTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `MENTORA_API_URL`: base URL of the backend that serves `/api/*`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MENTORA_PROXY_TIMEOUT_SECS`: default 30
    /// - `MENTORA_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the backend URL is missing or any value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = parse_api_url(lookup("MENTORA_API_URL"))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeouts = ProxyTimeouts {
            request_secs: parse_or("MENTORA_PROXY_TIMEOUT_SECS", lookup("MENTORA_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "MENTORA_CONNECT_TIMEOUT_SECS",
                lookup("MENTORA_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { port, api_url, timeouts })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_api_url(raw: Option<String>) -> Result<String, ConfigError> {
    let raw = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        return Err(ConfigError::Missing("MENTORA_API_URL"));
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "MENTORA_API_URL", value: raw });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
