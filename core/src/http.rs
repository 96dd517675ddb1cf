//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP exchanges as plain data. The core crate builds
//! `HttpRequest` values and decodes delivered `RawResponse` values without
//! ever touching the network — the caller (host) executes the actual I/O and
//! hands back exactly one `RawResponse` per exchange. This separation keeps
//! the core deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so a response can move from
//! the host's delivery context into the decoding code without lifetime
//! concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ListingsClient::build_*` methods. The caller is responsible for
/// executing this request against the network and delivering the
/// corresponding `RawResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status line and headers of a completed HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// The host's delivery for one HTTP exchange.
///
/// A transport failure carries `error` and nothing else; a completed
/// exchange carries `parts` and usually a body. Delivered responses are
/// never mutated: decoding borrows the value and produces its own result,
/// so the same `RawResponse` always decodes the same way.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The request this response answers. Opaque to decoding.
    pub request: HttpRequest,
    /// Status and headers, present iff a response was received.
    pub parts: Option<ResponseParts>,
    /// Raw body bytes, if the response carried any.
    pub body: Option<Vec<u8>>,
    /// Transport-level failure, passed through opaquely from the host.
    pub error: Option<String>,
}

impl RawResponse {
    /// A completed exchange: status line plus an optional body.
    pub fn completed(request: HttpRequest, parts: ResponseParts, body: Option<Vec<u8>>) -> Self {
        Self {
            request,
            parts: Some(parts),
            body,
            error: None,
        }
    }

    /// A transport-level failure; no response was received.
    pub fn failed(request: HttpRequest, error: impl Into<String>) -> Self {
        Self {
            request,
            parts: None,
            body: None,
            error: Some(error.into()),
        }
    }

    /// Status code of the completed exchange, if one was received.
    pub fn status(&self) -> Option<u16> {
        self.parts.as_ref().map(|parts| parts.status)
    }
}
