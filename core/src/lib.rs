//! Outbound HTTP connector core for a workflow-automation engine.
//!
//! # Overview
//! One call in, one call out: a `RequestDescriptor` bound from the host's
//! process variables is turned into a single synchronous HTTP exchange and
//! normalized into a `ResultDescriptor` (status, parsed-or-raw body, joined
//! headers) or exactly one typed failure.
//!
//! # Design
//! - `build_request` and `normalize_response` are pure transformations over
//!   plain-data wire types; only `HttpTransport` performs I/O, so the whole
//!   contract is testable without a network.
//! - `RequestExecutor` is stateless apart from the shared transport and may
//!   be reused across concurrent workflow instances.
//! - A response body that fails to parse as JSON degrades to the raw string;
//!   it is never a hard failure.

pub mod descriptor;
pub mod error;
pub mod executor;
pub mod http;
pub mod transport;

pub use descriptor::{Payload, RequestDescriptor, ResultDescriptor};
pub use error::ConnectorError;
pub use executor::{build_request, normalize_response, RequestExecutor};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, UreqTransport};
