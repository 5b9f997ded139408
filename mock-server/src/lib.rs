//! A stand-in for the GetResponse v3 API used by tests.
//!
//! Every request is recorded and, unless it is rejected, echoed back as a
//! JSON `RecordedRequest`. DELETE answers `204 No Content` like the real
//! API; a missing or malformed `X-Auth-Token` answers `401` with the API's
//! error shape. `GET /__recorded` lists everything received so far.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

/// One request as the server saw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Raw query string exactly as it arrived, without the `?`.
    pub query: Option<String>,
    /// Header names are lowercase.
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

/// Build the router around a shared log so callers can inspect it directly.
pub fn app_with_log(log: RequestLog) -> Router {
    Router::new()
        .route("/__recorded", get(list_recorded))
        .fallback(record)
        .with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn list_recorded(State(log): State<RequestLog>) -> Json<Vec<RecordedRequest>> {
    Json(log.read().await.clone())
}

async fn record(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect(),
        body,
    };
    tracing::info!(
        method = %recorded.method,
        path = %recorded.path,
        query = ?recorded.query,
        "recorded request"
    );
    log.write().await.push(recorded.clone());

    if !is_authenticated(&recorded) {
        return (StatusCode::UNAUTHORIZED, Json(auth_error())).into_response();
    }
    if method == Method::DELETE {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(recorded).into_response()
}

fn is_authenticated(request: &RecordedRequest) -> bool {
    request
        .headers
        .get("x-auth-token")
        .and_then(|token| token.strip_prefix("api-key "))
        .is_some_and(|key| !key.is_empty())
}

fn auth_error() -> serde_json::Value {
    json!({
        "httpStatus": 401,
        "code": 1014,
        "codeDescription": "Problem during authentication process, check headers!",
        "message": "Unable to authenticate request. Check credentials or authentication method details",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(token: Option<&str>) -> RecordedRequest {
        let mut headers = BTreeMap::new();
        if let Some(token) = token {
            headers.insert("x-auth-token".to_string(), token.to_string());
        }
        RecordedRequest {
            method: "GET".to_string(),
            path: "/v3/accounts".to_string(),
            query: None,
            headers,
            body: String::new(),
        }
    }

    #[test]
    fn api_key_token_is_accepted() {
        assert!(is_authenticated(&recorded(Some("api-key abc123"))));
    }

    #[test]
    fn missing_or_malformed_token_is_rejected() {
        assert!(!is_authenticated(&recorded(None)));
        assert!(!is_authenticated(&recorded(Some("abc123"))));
        assert!(!is_authenticated(&recorded(Some("api-key "))));
    }

    #[test]
    fn recorded_request_roundtrips_through_json() {
        let req = RecordedRequest {
            query: Some("a=1&b[0]=2".to_string()),
            ..recorded(Some("api-key k"))
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: RecordedRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn auth_error_matches_api_shape() {
        let err = auth_error();
        assert_eq!(err["httpStatus"], 401);
        assert_eq!(err["code"], 1014);
    }
}
