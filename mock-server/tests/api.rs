use axum::http::{self, header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, EchoReply, PLAIN_BODY};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_method_headers_and_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header(http::header::CONTENT_TYPE, "application/json")
                .header("authorization", "Bearer token")
                .body(r#"{"a":1}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "POST");
    assert_eq!(reply.headers.get("content-type").unwrap(), "application/json");
    assert_eq!(reply.headers.get("authorization").unwrap(), "Bearer token");
    assert_eq!(reply.body, r#"{"a":1}"#);
}

#[tokio::test]
async fn echo_reports_empty_body_for_get() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/echo").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "GET");
    assert!(reply.body.is_empty());
}

#[tokio::test]
async fn echo_joins_repeated_request_headers() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header("x-tag", "one")
                .header("x-tag", "two")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.headers.get("x-tag").unwrap(), "one,two");
}

// --- text ---

#[tokio::test]
async fn text_returns_requested_status_with_plain_body() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/text/503").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_bytes(resp).await;
    assert_eq!(body, PLAIN_BODY.as_bytes());
}

#[tokio::test]
async fn text_accepts_any_method() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/text/404")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn text_out_of_range_code_returns_400() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/text/99").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- cookies ---

#[tokio::test]
async fn cookies_sets_two_set_cookie_headers() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/cookies").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let values: Vec<_> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(values, vec!["a", "b"]);

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}
