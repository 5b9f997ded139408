//! Synchronous client for the GetResponse v3 REST API.
//!
//! # Overview
//! Each API resource is one method on `GetResponseClient`. A method maps its
//! arguments to a `RequestSpec` (verb, path, parameters); the client turns
//! that into an `HttpRequest`, sends it once through a `Transport`, and
//! returns the decoded JSON together with the observed HTTP status.
//!
//! # Design
//! - `ClientConfig` is immutable; the client keeps no state between calls.
//! - Request assembly (`build_request`) is pure, so every resource can be
//!   checked without a network.
//! - GET parameters are encoded with literal bracket notation
//!   (`query[name]=x`), which the remote API relies on.
//! - Non-2xx responses are returned, not raised. An empty resource path
//!   returns a fixed synthetic error body with no status.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod request;
pub mod response;
pub mod transport;

pub use client::GetResponseClient;
pub use config::{ClientConfig, ClientOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use request::{into_params, Params, RequestSpec};
pub use response::ApiResponse;
pub use transport::UreqTransport;
