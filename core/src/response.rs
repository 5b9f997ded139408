//! Dispatch results.
//!
//! # Design
//! The status observed on the wire travels with the decoded body instead of
//! living on the client, so concurrent calls never see each other's state.
//! A `None` status marks the synthetic result returned for an empty
//! resource path; its `"httpStatus": "400"` field is a sentinel, not a
//! transport status.

use serde_json::{json, Value};

use crate::http::HttpResponse;

/// The outcome of one dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status from the server, `None` if no request was sent.
    pub status: Option<u16>,
    /// Decoded JSON body, `Value::Null` when the body was empty or not JSON.
    pub body: Value,
}

impl ApiResponse {
    /// Decode a raw response. The body is taken as-is: no schema checks and
    /// no translation of API error codes.
    pub fn from_http(response: &HttpResponse) -> Self {
        Self {
            status: Some(response.status),
            body: serde_json::from_str(&response.body).unwrap_or(Value::Null),
        }
    }

    /// The fixed result for a call made with an empty resource path.
    pub fn invalid_api_method() -> Self {
        Self {
            status: None,
            body: json!({
                "httpStatus": "400",
                "code": "1010",
                "codeDescription": "Error in external resources",
                "message": "Invalid api method",
            }),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.status.is_none()
    }

    /// True for a real 2xx response.
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}
