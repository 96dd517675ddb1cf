//! Typed response decoding core for the listings service.
//!
//! # Overview
//! Builds `HttpRequest` values and decodes delivered `RawResponse` values
//! into typed models without touching the network (host-does-IO pattern).
//! The caller executes the actual HTTP round-trip and hands the completed
//! exchange back, making the core fully deterministic and testable.
//!
//! # Design
//! - The decode pipeline is written once: `decode_response` is parametric in
//!   the model type and takes the model builder as a value per call. Adding
//!   an endpoint means adding a builder, never another copy of the pipeline.
//! - `ListingsClient` is stateless — it holds only `base_url` — and splits
//!   each operation into `build_*` / `parse_*`, so the I/O boundary is
//!   explicit.
//! - Hosts that deliver results through an untyped callback recover the
//!   typed contract with `completion::narrow`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod completion;
pub mod decode;
pub mod error;
pub mod http;
pub mod types;

pub use client::ListingsClient;
pub use completion::{narrow, respond, RawOutcome};
pub use decode::{decode_listing, decode_listing_page, decode_response, decode_unit};
pub use error::{ApiError, DecodeError};
pub use http::{HttpMethod, HttpRequest, RawResponse, ResponseParts};
pub use types::{CreateListing, Listing, UpdateListing};
