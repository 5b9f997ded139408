//! Client configuration.
//!
//! # Design
//! `ClientOptions` is the loose, optional input (it deserializes from the
//! same keys the historical options bag used). `ClientConfig` is the
//! validated, immutable result. Empty strings and a zero timeout count as
//! "not set" and keep the built-in defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_ENDPOINT: &str = "https://api.getresponse.com/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const USER_AGENT: &str = "Rust GetResponse client";

/// Optional settings applied on top of the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Base URL override, e.g. an enterprise endpoint.
    pub endpoint: Option<String>,
    /// Tenant domain, sent as `X-Domain`.
    pub domain: Option<String>,
    /// Application identifier, sent as `X-APP-ID`.
    #[serde(alias = "appId")]
    pub app_id: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

/// Validated client configuration. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    endpoint: String,
    domain: Option<String>,
    app_id: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration, failing if `api_key` is blank.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let endpoint = options
            .endpoint
            .map(|e| e.trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout = options
            .timeout
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            endpoint,
            domain: non_empty(options.domain),
            app_id: non_empty(options.app_id),
            timeout: Duration::from_secs(timeout),
        })
    }

    /// Build a configuration from `GETRESPONSE_*` environment variables.
    ///
    /// `GETRESPONSE_API_KEY` is required; `GETRESPONSE_ENDPOINT`,
    /// `GETRESPONSE_DOMAIN`, `GETRESPONSE_APP_ID` and `GETRESPONSE_TIMEOUT`
    /// are optional.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let api_key = lookup("GETRESPONSE_API_KEY").ok_or(ApiError::MissingApiKey)?;
        let timeout = match non_empty(lookup("GETRESPONSE_TIMEOUT")) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ApiError::InvalidConfig(format!("GETRESPONSE_TIMEOUT={raw:?}: {e}"))
            })?),
            None => None,
        };
        let options = ClientOptions {
            endpoint: lookup("GETRESPONSE_ENDPOINT"),
            domain: lookup("GETRESPONSE_DOMAIN"),
            app_id: lookup("GETRESPONSE_APP_ID"),
            timeout,
        };
        Self::new(api_key, options)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Hand-written so the API key never ends up in logs or panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("domain", &self.domain)
            .field("app_id", &self.app_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
