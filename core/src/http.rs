//! Wire-level HTTP types, described as plain data.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` carry owned `String` / `Vec` fields and
//! know nothing about the client executing them. Request building and
//! response normalization operate purely on these types, so the whole
//! transformation is testable without a network; only `HttpTransport`
//! touches the wire.

use crate::error::ConnectorError;

/// HTTP verb selected for an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Resolve a method token from the workflow engine, case-insensitively.
    ///
    /// `SCORING` is a domain alias for POST: identical wire behavior,
    /// distinct only for readability of the calling process model. Unknown
    /// tokens fail here, before any network I/O.
    pub fn from_token(token: &str) -> Result<Self, ConnectorError> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "DELETE" => Ok(HttpMethod::Delete),
            "POST" | "SCORING" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            _ => Err(ConnectorError::UnsupportedMethod(token.to_string())),
        }
    }

    /// GET and DELETE requests never carry a body, even when the descriptor
    /// declares a payload.
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An outbound HTTP request described as plain data.
///
/// Built by `build_request`; executed by an `HttpTransport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an `HttpTransport`, then consumed by `normalize_response`.
/// Repeated header names appear as separate entries in arrival order.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
