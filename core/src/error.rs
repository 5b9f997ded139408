//! Error types for the GetResponse API client.
//!
//! # Design
//! Only failures the client itself can detect become errors. Non-2xx
//! responses are data, not errors: they come back as an `ApiResponse`
//! carrying the observed status and whatever body the server sent.
//! `InvalidApiMethod` is raised by request assembly only; `dispatch` turns
//! it into the synthetic error result instead of returning it.

use thiserror::Error;

/// Errors returned by `GetResponseClient` and its configuration.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client was constructed without an API key.
    #[error("an API key is required")]
    MissingApiKey,

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The resource path was empty.
    #[error("invalid api method")]
    InvalidApiMethod,

    /// Request parameters could not be serialized to a JSON object.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced an HTTP response (DNS, TLS, timeout...).
    #[error("transport failure: {0}")]
    Transport(String),
}
