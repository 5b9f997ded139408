//! Blocking HTTP transport backed by `ureq`.
//!
//! HTTP error statuses are returned as data. Responses are gzip-decoded by
//! ureq; deflate is not offered because ureq has no deflate decoder. Idle
//! connections are never kept, so every call opens a fresh connection.
//! Bodies are read in full, with no size cap.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::USER_AGENT;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Bytes an HTTP URI cannot carry. Brackets, `=` and `&` stay literal.
const URI_UNSAFE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(USER_AGENT)
            .max_idle_connections(0)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = wire_url(&request.url);
        let timeout = Some(request.timeout);

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(&url), request)
                .config()
                .timeout_global(timeout)
                .build()
                .call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&url), request)
                .config()
                .timeout_global(timeout)
                .build()
                .call(),
            HttpMethod::Post => with_headers(self.agent.post(&url), request)
                .config()
                .timeout_global(timeout)
                .build()
                .send(request.body.as_deref().unwrap_or("").as_bytes()),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .unwrap_or_else(|e| {
                tracing::warn!(status, error = %e, "could not read response body");
                String::new()
            });

        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Escape only what the URI parser would reject, leaving the literal
/// bracket notation of the query string intact.
fn wire_url(url: &str) -> String {
    utf8_percent_encode(url, URI_UNSAFE).to_string()
}
