//! Adapters between the typed decode pipeline and host completion callbacks.
//!
//! # Design
//! Some hosts deliver decode results as an untyped `(value, error)` pair
//! rather than invoking a typed completion directly. [`narrow`] recovers the
//! typed contract at that boundary: an error passes through unchanged, a
//! present value must downcast to the expected model type, and an empty
//! outcome is reported as [`DecodeError::Inconsistent`], never as success.
//! The typed path inside the crate makes the "neither model nor error"
//! state unrepresentable, so this boundary is the only producer of
//! `TypeMismatch` and `Inconsistent` values during decoding.

use std::any::{type_name, Any};

use serde_json::Value;

use crate::decode::decode_response;
use crate::error::DecodeError;
use crate::http::RawResponse;

/// An untyped decode outcome, as delivered by a host's raw callback.
///
/// At most one of `value` and `error` should be set; [`narrow`] turns every
/// other combination into a descriptive error.
pub struct RawOutcome {
    pub value: Option<Box<dyn Any + Send>>,
    pub error: Option<DecodeError>,
}

impl RawOutcome {
    /// An outcome carrying a decoded model.
    pub fn of<T: Any + Send>(model: T) -> Self {
        Self {
            value: Some(Box::new(model)),
            error: None,
        }
    }

    /// An outcome carrying an error.
    pub fn failed(error: DecodeError) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
    }

    /// An outcome carrying nothing at all. Narrowing reports it as
    /// [`DecodeError::Inconsistent`].
    pub fn empty() -> Self {
        Self {
            value: None,
            error: None,
        }
    }
}

/// Narrow an untyped outcome to the model type the caller expects.
///
/// An error present in the outcome is forwarded unchanged. A value of the
/// wrong runtime type becomes [`DecodeError::TypeMismatch`] rather than a
/// silently propagated null, and an outcome with neither value nor error
/// becomes [`DecodeError::Inconsistent`].
pub fn narrow<T: Any>(outcome: RawOutcome) -> Result<T, DecodeError> {
    if let Some(error) = outcome.error {
        return Err(error);
    }
    match outcome.value {
        Some(value) => match value.downcast::<T>() {
            Ok(model) => Ok(*model),
            Err(_) => Err(DecodeError::TypeMismatch {
                expected: type_name::<T>(),
            }),
        },
        None => Err(DecodeError::Inconsistent("no model and no error")),
    }
}

/// Decode `response` with `build` and hand the result to `on_complete`.
///
/// `on_complete` is consumed, so it runs exactly once per delivered
/// response, with exactly one of model or error.
pub fn respond<T, B, F>(response: &RawResponse, build: B, on_complete: F)
where
    B: FnOnce(Value) -> Result<T, DecodeError>,
    F: FnOnce(Result<T, DecodeError>),
{
    on_complete(decode_response(response, build));
}
