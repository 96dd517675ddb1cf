//! Stateless HTTP request builder and response parser for the listings API.
//!
//! # Design
//! `ListingsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes a
//! delivered `RawResponse`. The caller executes the actual HTTP round-trip
//! in between, keeping the core deterministic and free of I/O dependencies.
//! Every `parse_*` method is the same two steps: `check_status`, then the
//! pre-bound decoder for the operation's model type.

use uuid::Uuid;

use crate::decode;
use crate::error::{ApiError, DecodeError};
use crate::http::{HttpMethod, HttpRequest, RawResponse};
use crate::types::{CreateListing, Listing, UpdateListing};

/// Synchronous, stateless client for the listings API.
///
/// Builds `HttpRequest` values and decodes `RawResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    base_url: String,
}

impl ListingsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_search_listings(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/listings", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_listing(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/listings/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_listing(&self, input: &CreateListing) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/listings", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_listing(
        &self,
        id: Uuid,
        input: &UpdateListing,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/listings/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_listing(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/listings/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_search_listings(&self, response: RawResponse) -> Result<Vec<Listing>, ApiError> {
        check_status(&response, 200)?;
        Ok(decode::decode_listing_page(&response)?)
    }

    pub fn parse_get_listing(&self, response: RawResponse) -> Result<Listing, ApiError> {
        check_status(&response, 200)?;
        Ok(decode::decode_listing(&response)?)
    }

    pub fn parse_create_listing(&self, response: RawResponse) -> Result<Listing, ApiError> {
        check_status(&response, 201)?;
        Ok(decode::decode_listing(&response)?)
    }

    pub fn parse_update_listing(&self, response: RawResponse) -> Result<Listing, ApiError> {
        check_status(&response, 200)?;
        Ok(decode::decode_listing(&response)?)
    }

    pub fn parse_delete_listing(&self, response: RawResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        Ok(decode::decode_unit(&response)?)
    }
}

/// Map transport failures and non-success status codes to the appropriate
/// `ApiError` variant before any decoding happens.
fn check_status(response: &RawResponse, expected: u16) -> Result<(), ApiError> {
    if let Some(error) = &response.error {
        return Err(DecodeError::Transport(error.clone()).into());
    }
    let parts = match &response.parts {
        Some(parts) => parts,
        // A completed exchange with neither a response nor a transport
        // error is a defect in the host, not a decodable state.
        None => {
            return Err(DecodeError::Inconsistent("no response and no transport error").into())
        }
    };
    if parts.status == expected {
        return Ok(());
    }
    if parts.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: parts.status,
        body: body_text(response),
    })
}

fn body_text(response: &RawResponse) -> String {
    response
        .body
        .as_deref()
        .map(|body| String::from_utf8_lossy(body).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ResponseParts;

    fn client() -> ListingsClient {
        ListingsClient::new("http://localhost:3000")
    }

    fn delivered(request: HttpRequest, status: u16, body: &str) -> RawResponse {
        RawResponse::completed(
            request,
            ResponseParts {
                status,
                headers: Vec::new(),
            },
            Some(body.as_bytes().to_vec()),
        )
    }

    #[test]
    fn build_search_listings_produces_correct_request() {
        let req = client().build_search_listings();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/listings");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_listing_produces_correct_request() {
        let req = client().build_get_listing(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/listings/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_listing_produces_correct_request() {
        let input = CreateListing {
            title: "Standing desk".to_string(),
            price_cents: 24900,
        };
        let req = client().build_create_listing(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/listings");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Standing desk");
        assert_eq!(body["price_cents"], 24900);
    }

    #[test]
    fn build_update_listing_omits_absent_fields() {
        let input = UpdateListing {
            title: Some("Updated".to_string()),
            price_cents: None,
        };
        let req = client().build_update_listing(Uuid::nil(), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert!(body.get("price_cents").is_none());
    }

    #[test]
    fn build_delete_listing_produces_correct_request() {
        let req = client().build_delete_listing(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_search_listings_success() {
        let req = client().build_search_listings();
        let response = delivered(
            req,
            200,
            r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"Desk","price_cents":100}]"#,
        );
        let listings = client().parse_search_listings(response).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Desk");
    }

    #[test]
    fn parse_get_listing_not_found() {
        let req = client().build_get_listing(Uuid::nil());
        let response = delivered(req, 404, "");
        let err = client().parse_get_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_get_listing_transport_failure() {
        let req = client().build_get_listing(Uuid::nil());
        let response = RawResponse::failed(req, "connection refused");
        let err = client().parse_get_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::Decode(DecodeError::Transport(_))));
    }

    #[test]
    fn parse_get_listing_without_parts_or_error_is_inconsistent() {
        let response = RawResponse {
            request: client().build_get_listing(Uuid::nil()),
            parts: None,
            body: None,
            error: None,
        };
        let err = client().parse_get_listing(response).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode(DecodeError::Inconsistent(_))
        ));
    }

    #[test]
    fn parse_create_listing_success() {
        let input = CreateListing {
            title: "New".to_string(),
            price_cents: 500,
        };
        let req = client().build_create_listing(&input).unwrap();
        let response = delivered(
            req,
            201,
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"New","price_cents":500}"#,
        );
        let created = client().parse_create_listing(response).unwrap();
        assert_eq!(created.title, "New");
    }

    #[test]
    fn parse_create_listing_wrong_status() {
        let input = CreateListing {
            title: "New".to_string(),
            price_cents: 500,
        };
        let req = client().build_create_listing(&input).unwrap();
        let response = delivered(req, 500, "internal error");
        let err = client().parse_create_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_listing_rejects_invalid_model() {
        let input = UpdateListing {
            title: None,
            price_cents: Some(-1),
        };
        let req = client().build_update_listing(Uuid::nil(), &input).unwrap();
        let response = delivered(
            req,
            200,
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Desk","price_cents":-1}"#,
        );
        let err = client().parse_update_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::Decode(DecodeError::Model(_))));
    }

    #[test]
    fn parse_delete_listing_accepts_empty_object() {
        let req = client().build_delete_listing(Uuid::nil());
        let response = delivered(req, 200, "{}");
        assert!(client().parse_delete_listing(response).is_ok());
    }

    #[test]
    fn parse_delete_listing_rejects_unexpected_payload() {
        let req = client().build_delete_listing(Uuid::nil());
        let response = delivered(
            req,
            200,
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Desk","price_cents":100}"#,
        );
        let err = client().parse_delete_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::Decode(DecodeError::Model(_))));
    }

    #[test]
    fn parse_delete_listing_not_found() {
        let req = client().build_delete_listing(Uuid::nil());
        let response = delivered(req, 404, "");
        let err = client().parse_delete_listing(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_search_listings_bad_json() {
        let req = client().build_search_listings();
        let response = delivered(req, 200, "not json");
        let err = client().parse_search_listings(response).unwrap_err();
        assert!(matches!(err, ApiError::Decode(DecodeError::BodyParse(_))));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ListingsClient::new("http://localhost:3000/");
        let req = client.build_search_listings();
        assert_eq!(req.path, "http://localhost:3000/listings");
    }
}
