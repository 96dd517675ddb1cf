//! Domain DTOs for the listings API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently; integration tests catch any schema drift between the two
//! crates. Models carry no shared base type and are never mutated after a
//! successful decode — each decode attempt constructs a fresh value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single listing returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub price_cents: i64,
}

/// Request payload for creating a new listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListing {
    pub title: String,
    #[serde(default)]
    pub price_cents: i64,
}

/// Request payload for updating an existing listing. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i64>,
}
