//! HTTP transport, the one seam that touches the network.
//!
//! # Design
//! `HttpTransport` is the injected client collaborator: it executes exactly
//! one request/response exchange and reports anything that prevents the
//! exchange from completing as `NetworkError`, unmodified and unretried.
//! Tests substitute a canned-response double; production uses `UreqTransport`
//! with a shared agent so connection pooling stays the client's concern.

use std::time::Duration;

use crate::error::ConnectorError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP exchange for the request executor.
pub trait HttpTransport {
    /// Blocks until the exchange completes or fails. Must not retry.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ConnectorError>;
}

/// Production transport backed by a shared `ureq::Agent`.
///
/// Non-2xx statuses are returned as data rather than `Err`; status
/// interpretation belongs to the caller of the connector, not the transport.
/// Redirect handling is left at ureq's defaults.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with a fixed 30-second connect timeout. No per-call override.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(Duration::from_secs(30)))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ConnectorError> {
        let url = request.url.as_str();
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &request.headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), &request.headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), &request.headers).send_empty(),
        };

        let mut response = result.map_err(|e| ConnectorError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        // HeaderMap yields one entry per value, so repeated names survive
        // in arrival order for downstream joining.
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ConnectorError::NetworkError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Apply assembled headers to a ureq request builder of either body kind.
fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
