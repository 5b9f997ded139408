use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_log, RecordedRequest, RequestLog};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Auth-Token", "api-key abc123")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn get_is_echoed_with_raw_query() {
    let resp = app()
        .oneshot(authed("GET", "/v3/contacts?query[email]=a@b.c&perPage=10", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: RecordedRequest = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/v3/contacts");
    assert_eq!(echo.query.as_deref(), Some("query[email]=a@b.c&perPage=10"));
    assert_eq!(echo.headers["x-auth-token"], "api-key abc123");
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn post_body_is_echoed() {
    let resp = app()
        .oneshot(authed("POST", "/v3/campaigns", r#"{"name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: RecordedRequest = body_json(resp).await;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.body, r#"{"name":"x"}"#);
    assert_eq!(echo.headers["content-type"], "application/json");
    assert!(echo.query.is_none());
}

// --- delete ---

#[tokio::test]
async fn delete_returns_204_without_body() {
    let resp = app()
        .oneshot(authed("DELETE", "/v3/contacts/abc", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/v3/accounts").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let err: serde_json::Value = body_json(resp).await;
    assert_eq!(err["code"], 1014);
}

// --- log ---

#[tokio::test]
async fn every_request_is_logged_even_when_rejected() {
    let log = RequestLog::default();

    app_with_log(log.clone())
        .oneshot(authed("GET", "/v3/accounts", ""))
        .await
        .unwrap();
    app_with_log(log.clone())
        .oneshot(Request::builder().uri("/v3/forms").body(String::new()).unwrap())
        .await
        .unwrap();

    let recorded = log.read().await;
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].path, "/v3/accounts");
    assert_eq!(recorded[1].path, "/v3/forms");
}

#[tokio::test]
async fn recorded_endpoint_lists_requests() {
    let log = RequestLog::default();
    app_with_log(log.clone())
        .oneshot(authed("POST", "/v3/newsletters", r#"{"subject":"Hi"}"#))
        .await
        .unwrap();

    let resp = app_with_log(log)
        .oneshot(Request::builder().uri("/__recorded").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: Vec<RecordedRequest> = body_json(resp).await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].body, r#"{"subject":"Hi"}"#);
}
