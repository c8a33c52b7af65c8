//! Resource index handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ApiRootResponse {
    pub locations: String,
}

/// GET /api
/// Links to the available resources
pub async fn api_root(State(state): State<AppState>) -> Json<ApiRootResponse> {
    Json(ApiRootResponse {
        locations: state.links().collection_url().to_string(),
    })
}
