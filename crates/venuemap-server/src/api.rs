//! Read-only presentation API over the ingested location collection.
//!
//! The collection is built once at startup and never mutated, so every
//! handler just projects from the shared [`Catalog`]. Selection and
//! playback state live in the client; the server has no session endpoint.

use std::sync::Arc;

use axum::{extract::State, http::Method, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use venuemap_core::{Location, Marker};

/// The immutable result of the startup ingestion run.
pub struct Catalog {
    pub locations: Vec<Location>,
    pub source_url: String,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    #[must_use]
    pub fn new(locations: Vec<Location>, source_url: String) -> Self {
        Self {
            locations,
            source_url,
            loaded_at: Utc::now(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    locations: usize,
    source_url: String,
    loaded_at: DateTime<Utc>,
}

pub fn build_app(state: AppState) -> Router {
    // The map front-end is served from elsewhere; GET-only, open CORS.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/markers", get(list_markers))
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        locations: state.catalog.locations.len(),
        source_url: state.catalog.source_url.clone(),
        loaded_at: state.catalog.loaded_at,
    })
}

async fn list_locations(State(state): State<AppState>) -> Json<Vec<Location>> {
    Json(state.catalog.locations.clone())
}

/// Marker descriptors for the map widget, one per location, in ingestion
/// order.
async fn list_markers(State(state): State<AppState>) -> Json<Vec<Marker>> {
    Json(state.catalog.locations.iter().map(Location::marker).collect())
}
