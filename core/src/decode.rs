//! Generic decoding of delivered responses into typed models.
//!
//! # Design
//! The dispatch order (transport error, then body parse, then model build)
//! is written once in [`decode_response`] and reused for every model type by
//! passing a different builder. Builders are plain values supplied per call;
//! there is no registry of decoders anywhere in the crate. The per-model
//! builders (`listing`, `listing_page`, `unit`) live here next to the
//! pipeline, together with the pre-bound `decode_*` entry points the client
//! layer uses.

use serde_json::Value;

use crate::error::DecodeError;
use crate::http::RawResponse;
use crate::types::Listing;

/// Decode one delivered response into a `T` using `build`.
///
/// Dispatch order:
/// 1. a transport error fails with [`DecodeError::Transport`], without the
///    body ever being inspected;
/// 2. an absent or malformed body fails with [`DecodeError::BodyParse`];
/// 3. otherwise the parsed body is handed to `build`, whose result is
///    returned unchanged.
///
/// The function is pure: it holds no state, performs no I/O, and equal
/// inputs decode to equal results, so it is safe to call from whatever
/// thread or task the host delivers responses on.
pub fn decode_response<T, B>(response: &RawResponse, build: B) -> Result<T, DecodeError>
where
    B: FnOnce(Value) -> Result<T, DecodeError>,
{
    if let Some(error) = &response.error {
        return Err(DecodeError::Transport(error.clone()));
    }
    let body = match &response.body {
        Some(body) => body.as_slice(),
        None => return Err(DecodeError::BodyParse("response carried no body".to_string())),
    };
    let parsed: Value =
        serde_json::from_slice(body).map_err(|e| DecodeError::BodyParse(e.to_string()))?;
    build(parsed)
}

/// Builder for a single listing.
///
/// Deserializes the parsed body and applies domain validation: a listing
/// must have a non-empty title and a non-negative price.
pub fn listing(value: Value) -> Result<Listing, DecodeError> {
    let listing: Listing =
        serde_json::from_value(value).map_err(|e| DecodeError::model(e.to_string()))?;
    if listing.title.is_empty() {
        return Err(DecodeError::model("listing title is empty"));
    }
    if listing.price_cents < 0 {
        return Err(DecodeError::model(format!(
            "negative price: {}",
            listing.price_cents
        )));
    }
    Ok(listing)
}

/// Builder for a page of listings. Every element is validated like
/// [`listing`]; one bad element fails the whole page.
pub fn listing_page(value: Value) -> Result<Vec<Listing>, DecodeError> {
    match value {
        Value::Array(items) => items.into_iter().map(listing).collect(),
        other => Err(DecodeError::model(format!(
            "expected an array of listings, got {}",
            json_kind(&other)
        ))),
    }
}

/// Builder for endpoints whose success payload carries no data.
///
/// Accepts `null` or an empty object. Any other shape means the caller
/// bound the wrong builder to this endpoint, which is reported as a model
/// error rather than silently coerced.
pub fn unit(value: Value) -> Result<(), DecodeError> {
    match value {
        Value::Null => Ok(()),
        Value::Object(map) if map.is_empty() => Ok(()),
        other => Err(DecodeError::model(format!(
            "expected an empty body, got {}",
            json_kind(&other)
        ))),
    }
}

/// Decode a response whose body is a single listing.
pub fn decode_listing(response: &RawResponse) -> Result<Listing, DecodeError> {
    decode_response(response, listing)
}

/// Decode a response whose body is an array of listings.
pub fn decode_listing_page(response: &RawResponse) -> Result<Vec<Listing>, DecodeError> {
    decode_response(response, listing_page)
}

/// Decode a response whose body carries no data.
pub fn decode_unit(response: &RawResponse) -> Result<(), DecodeError> {
    decode_response(response, unit)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
