//! Request building, execution and response normalization.
//!
//! # Design
//! The transformation is split the same way as the wire types: `build_request`
//! turns a descriptor into an `HttpRequest` and `normalize_response` turns an
//! `HttpResponse` into a `ResultDescriptor`, both without touching the
//! network. `RequestExecutor` composes the two around exactly one
//! `HttpTransport::send`, so every call terminates in exactly one result or
//! one propagated failure. No partial results, no internal retries.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::descriptor::{Payload, RequestDescriptor, ResultDescriptor};
use crate::error::ConnectorError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{HttpTransport, UreqTransport};

/// Executes one outbound call per invocation over an injected transport.
///
/// Stateless apart from the transport, which may pool connections
/// internally; a single executor can be shared across concurrent workflow
/// instances.
#[derive(Debug)]
pub struct RequestExecutor<T: HttpTransport> {
    transport: T,
}

impl RequestExecutor<UreqTransport> {
    /// Executor backed by the production ureq transport.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for RequestExecutor<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> RequestExecutor<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Issue the descriptor's request and normalize the response.
    ///
    /// Blocks the calling thread until the exchange completes or fails.
    /// `UnsupportedMethod` and `SerializationError` surface before any
    /// network I/O; transport failures propagate unmodified.
    pub fn execute(&self, descriptor: &RequestDescriptor) -> Result<ResultDescriptor, ConnectorError> {
        let request = build_request(descriptor)?;
        log::info!(
            "sending {} {} ({} headers, body: {} bytes)",
            request.method.as_str(),
            request.url,
            request.headers.len(),
            request.body.as_deref().map_or(0, str::len),
        );

        let response = self.transport.send(&request)?;
        log::info!(
            "received {} from {} (body: {} bytes)",
            response.status,
            request.url,
            response.body.len(),
        );

        Ok(normalize_response(response))
    }
}

/// Assemble the wire request for a descriptor.
///
/// Header precedence, later wins on (ASCII case-insensitive) name collision:
/// the JSON defaults, then `Authorization` from `authentication` when
/// non-blank, then the caller's headers, which may overwrite anything above,
/// `Content-Type` and `Authorization` included.
pub fn build_request(descriptor: &RequestDescriptor) -> Result<HttpRequest, ConnectorError> {
    let method = HttpMethod::from_token(&descriptor.method)?;

    let mut headers = vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ];
    if let Some(auth) = descriptor.authentication.as_deref() {
        // Forwarded verbatim, no Bearer/Basic prefixing.
        if !auth.trim().is_empty() {
            set_header(&mut headers, "Authorization", auth);
        }
    }
    if let Some(custom) = &descriptor.headers {
        for (name, value) in custom {
            set_header(&mut headers, name, value);
        }
    }

    let body = if method.allows_body() {
        descriptor.payload.as_ref().map(payload_body).transpose()?
    } else {
        None
    };

    Ok(HttpRequest {
        method,
        url: descriptor.url.clone(),
        headers,
        body,
    })
}

/// Serialize a payload into the request body.
fn payload_body(payload: &Payload) -> Result<String, ConnectorError> {
    match payload {
        // Already serialized by the caller, sent byte-for-byte.
        Payload::Raw(raw) => Ok(raw.clone()),
        Payload::Structured(value) => {
            serde_json::to_string(value).map_err(|e| ConnectorError::SerializationError(e.to_string()))
        }
    }
}

/// Overwrite an existing header (ASCII case-insensitive name match) or append.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
    {
        Some(slot) => *slot = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// Normalize a wire response into the connector's result contract.
///
/// Repeated header names join with `,` in arrival order. The body is parsed
/// as JSON on a best-effort basis; any parse failure (malformed JSON, empty
/// body) degrades to the raw string and is never a hard failure.
pub fn normalize_response(response: HttpResponse) -> ResultDescriptor {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in response.headers {
        match headers.entry(name) {
            Entry::Occupied(mut joined) => {
                let joined = joined.get_mut();
                joined.push(',');
                joined.push_str(&value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    let body = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("response body is not valid JSON ({e}), returning raw string");
            serde_json::Value::String(response.body)
        }
    };

    ResultDescriptor {
        status: response.status,
        body,
        headers,
    }
}
