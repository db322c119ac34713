//! Error types for the outbound connector.
//!
//! # Design
//! Three failure classes cover one connector call: the two caller input
//! errors (`UnsupportedMethod`, `SerializationError`) are raised before any
//! network I/O, while `NetworkError` propagates a transport failure to the
//! host unmodified; the host owns any retry policy. A response body that
//! fails to parse as JSON is deliberately NOT an error; it degrades to the
//! raw string (see `normalize_response`).

use std::fmt;

/// Errors returned by `RequestExecutor::execute`.
#[derive(Debug)]
pub enum ConnectorError {
    /// The method token is not one of GET, DELETE, POST, PUT or SCORING.
    UnsupportedMethod(String),

    /// The structured payload could not be serialized to JSON.
    SerializationError(String),

    /// The HTTP transport could not complete the exchange (connection
    /// refused, DNS failure, TLS failure, timeout).
    NetworkError(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::UnsupportedMethod(method) => {
                write!(f, "unsupported method: {method}")
            }
            ConnectorError::SerializationError(msg) => {
                write!(f, "payload serialization failed: {msg}")
            }
            ConnectorError::NetworkError(msg) => {
                write!(f, "request failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ConnectorError {}
