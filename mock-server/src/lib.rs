use std::collections::HashMap;

use axum::{
    extract::Path,
    http::{header, HeaderMap, Method, StatusCode},
    response::{AppendHeaders, IntoResponse},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Non-JSON body served by `/text/{code}`, exported so tests can assert the
/// raw-string fallback against the exact bytes.
pub const PLAIN_BODY: &str = "plain text body";

/// What `/echo` saw on the wire, reflected back as JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EchoReply {
    pub method: String,
    /// Header name to value as received; repeated names join with `,`.
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/text/{code}", any(text_status))
        .route("/cookies", get(cookies))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reflect the request back so clients can assert their exact wire behavior.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<EchoReply> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for (name, value) in headers.iter() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        seen.entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push(',');
                joined.push_str(&value);
            })
            .or_insert(value);
    }
    Json(EchoReply {
        method: method.to_string(),
        headers: seen,
        body,
    })
}

/// Respond with the requested status and a fixed non-JSON text body.
async fn text_status(Path(code): Path<u16>) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, PLAIN_BODY)
}

/// Respond with two `Set-Cookie` headers so clients can exercise
/// repeated-header handling.
async fn cookies() -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, "a"), (header::SET_COOKIE, "b")]),
        Json(serde_json::json!({})),
    )
}
