use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub price_cents: i64,
}

#[derive(Deserialize)]
pub struct CreateListing {
    pub title: String,
    #[serde(default)]
    pub price_cents: i64,
}

#[derive(Deserialize)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub price_cents: Option<i64>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Listing>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/listings", get(search_listings).post(create_listing))
        .route(
            "/listings/{id}",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn search_listings(State(db): State<Db>) -> Json<Vec<Listing>> {
    let listings = db.read().await;
    Json(listings.values().cloned().collect())
}

async fn create_listing(
    State(db): State<Db>,
    Json(input): Json<CreateListing>,
) -> Result<(StatusCode, Json<Listing>), StatusCode> {
    if input.title.is_empty() || input.price_cents < 0 {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let listing = Listing {
        id: Uuid::new_v4(),
        title: input.title,
        price_cents: input.price_cents,
    };
    db.write().await.insert(listing.id, listing.clone());
    Ok((StatusCode::CREATED, Json(listing)))
}

async fn get_listing(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, StatusCode> {
    let listings = db.read().await;
    listings.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_listing(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateListing>,
) -> Result<Json<Listing>, StatusCode> {
    if input.price_cents.is_some_and(|price| price < 0) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut listings = db.write().await;
    let listing = listings.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        listing.title = title;
    }
    if let Some(price_cents) = input.price_cents {
        listing.price_cents = price_cents;
    }
    Ok(Json(listing.clone()))
}

// Deletion answers 200 with an empty JSON object rather than a bare 204.
async fn delete_listing(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    let mut listings = db.write().await;
    listings
        .remove(&id)
        .map(|_| Json(json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
