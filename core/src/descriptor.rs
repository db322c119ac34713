//! Input and output descriptors exchanged with the workflow engine.
//!
//! # Design
//! `RequestDescriptor` is the connector's declared input contract. The
//! embedding host binds process variables straight into it through serde, so
//! the field names (`url`, `method`, `authentication`, `payload`, `headers`)
//! must stay exactly as declared for host compatibility. The descriptor is
//! immutable once bound and owned by the caller for the duration of one call.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One outbound request as declared by the workflow engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDescriptor {
    /// Absolute URI of the endpoint to call.
    pub url: String,
    /// Case-insensitive method token: GET, DELETE, POST, PUT or SCORING.
    pub method: String,
    /// Forwarded verbatim as the `Authorization` header value when non-blank.
    /// No scheme is inferred; the caller supplies `Bearer`/`Basic` itself.
    #[serde(default)]
    pub authentication: Option<String>,
    #[serde(default)]
    pub payload: Option<Payload>,
    /// Caller headers, applied last: they override the built-in defaults and
    /// the authentication header on key collision.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Body source for an outbound request.
///
/// A JSON string binds as `Raw` and is sent byte-for-byte unmodified (it is
/// assumed to be already serialized); every other JSON value binds as
/// `Structured` and is serialized with serde_json at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Raw(String),
    Structured(serde_json::Value),
}

/// Normalized outcome of one outbound call, handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDescriptor {
    pub status: u16,
    /// Parsed JSON body, or `Value::String` with the raw body when the
    /// response does not parse as JSON.
    pub body: serde_json::Value,
    /// Response header name to comma-joined values in the order received.
    pub headers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_binds_from_host_variables() {
        let descriptor: RequestDescriptor = serde_json::from_str(
            r#"{
                "url": "http://example.com/api",
                "method": "POST",
                "authentication": "Bearer token",
                "payload": {"key": "value"},
                "headers": {"X-Trace": "abc"}
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor.url, "http://example.com/api");
        assert_eq!(descriptor.method, "POST");
        assert_eq!(descriptor.authentication.as_deref(), Some("Bearer token"));
        assert_eq!(
            descriptor.payload,
            Some(Payload::Structured(serde_json::json!({"key": "value"})))
        );
        assert_eq!(
            descriptor.headers.as_ref().unwrap().get("X-Trace").unwrap(),
            "abc"
        );
    }

    #[test]
    fn descriptor_optional_fields_default_to_none() {
        let descriptor: RequestDescriptor =
            serde_json::from_str(r#"{"url": "http://example.com", "method": "GET"}"#).unwrap();

        assert!(descriptor.authentication.is_none());
        assert!(descriptor.payload.is_none());
        assert!(descriptor.headers.is_none());
    }

    #[test]
    fn string_payload_binds_as_raw() {
        let payload: Payload = serde_json::from_str(r#""{\"already\":\"serialized\"}""#).unwrap();
        assert_eq!(payload, Payload::Raw(r#"{"already":"serialized"}"#.to_string()));
    }

    #[test]
    fn object_payload_binds_as_structured() {
        let payload: Payload = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(payload, Payload::Structured(serde_json::json!({"a": 1})));
    }

    #[test]
    fn array_payload_binds_as_structured() {
        let payload: Payload = serde_json::from_str(r#"[1, 2, 3]"#).unwrap();
        assert_eq!(payload, Payload::Structured(serde_json::json!([1, 2, 3])));
    }

    #[test]
    fn result_serializes_with_declared_field_names() {
        let result = ResultDescriptor {
            status: 200,
            body: serde_json::json!({"result": "success"}),
            headers: BTreeMap::from([("content-type".to_string(), "application/json".to_string())]),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["body"]["result"], "success");
        assert_eq!(json["headers"]["content-type"], "application/json");
    }
}
