//! multiverse-api - REST API layer for the location dataset
//!
//! This crate provides the HTTP API that serves a [`Dataset`] loaded by the
//! caller. Every request is answered from the shared, read-only dataset.
//!
//! # Usage
//!
//! ```ignore
//! use multiverse_api::{create_router, AppState};
//! use multiverse_core::Dataset;
//!
//! let state = AppState::with_public_url(Dataset::bundled()?, "http://localhost:8080")?;
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the location REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Resource index
        .route("/api", get(handlers::root::api_root))
        // Location routes
        .route("/api/location", get(handlers::locations::list_locations))
        .route("/api/location/", get(handlers::locations::list_locations))
        .route(
            "/api/location/{ids}",
            get(handlers::locations::get_locations),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
