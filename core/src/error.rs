//! Error types for the listings API client.
//!
//! # Design
//! `DecodeError` is the decode pipeline's taxonomy: every way a delivered
//! response can fail to become a typed model. It is kept separate from
//! status interpretation so the pipeline stays reusable across model types.
//! `ApiError` wraps it at the client layer, where `NotFound` gets a
//! dedicated variant because callers frequently distinguish "the resource
//! does not exist" from "the server returned an unexpected status."

use std::fmt;

/// Errors produced while decoding one delivered response into a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The transport reported a failure; no response body exists.
    Transport(String),

    /// The response body was absent or was not valid JSON.
    BodyParse(String),

    /// A builder rejected the parsed body on domain grounds.
    Model(String),

    /// An untyped outcome carried a value of the wrong runtime type.
    TypeMismatch { expected: &'static str },

    /// An outcome carried neither a model nor an error. Always a defect in
    /// the producer; must never be treated as success.
    Inconsistent(&'static str),
}

impl DecodeError {
    /// Builder-level domain failure.
    pub fn model(reason: impl Into<String>) -> Self {
        DecodeError::Model(reason.into())
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Transport(msg) => write!(f, "transport failure: {msg}"),
            DecodeError::BodyParse(msg) => write!(f, "body parse failed: {msg}"),
            DecodeError::Model(msg) => write!(f, "model rejected: {msg}"),
            DecodeError::TypeMismatch { expected } => {
                write!(f, "decoded value is not a {expected}")
            }
            DecodeError::Inconsistent(msg) => write!(f, "inconsistent outcome: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors returned by `ListingsClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested listing does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The delivered response could not be decoded into the expected model.
    Decode(DecodeError),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl From<DecodeError> for ApiError {
    fn from(error: DecodeError) -> Self {
        ApiError::Decode(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(error) => write!(f, "decode failed: {error}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Decode(error) => Some(error),
            _ => None,
        }
    }
}
