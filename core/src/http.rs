//! HTTP transport types and the seam between request assembly and I/O.
//!
//! # Design
//! Requests and responses are plain data. `GetResponseClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and decodes the returned
//! `HttpResponse`. The default transport is `UreqTransport`; tests swap in
//! recording doubles without touching the network.

use std::time::Duration;

use crate::error::ApiError;

/// HTTP verbs used by the GetResponse API.
///
/// Each verb carries its own encoding rule: `Get` puts parameters in the
/// query string, `Post` sends them as a JSON body, `Delete` sends nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single HTTP round-trip.
///
/// Implementations must return `Ok` for every response the server sent,
/// whatever its status. `Err` is reserved for requests that never got one.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
