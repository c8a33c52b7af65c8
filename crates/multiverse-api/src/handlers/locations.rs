//! Location handlers
//!
//! Supports:
//! - GET /api/location - filtered, paginated list
//! - GET /api/location/{id} - single location
//! - GET /api/location/{ids} - locations for a comma-separated or bracketed id list

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use multiverse_core::{IdSelector, ListQuery, Lookup};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/location
/// List locations matching the `name`, `type` and `dimension` filters, one page at a time
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let query = ListQuery::from_params(&params)?;
    let page = state.dataset().list(&query, state.links())?;

    tracing::debug!(
        page = query.page,
        count = page.info.count,
        returned = page.results.len(),
        "Listed locations"
    );

    Ok(Json(page).into_response())
}

/// GET /api/location/{ids}
/// Get one location by id, or an array of locations by id list
pub async fn get_locations(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<Response, ApiError> {
    let selector = IdSelector::parse(&ids)?;

    let response = match state.dataset().lookup(&selector)? {
        Lookup::One(location) => Json(location).into_response(),
        Lookup::Many(locations) => {
            tracing::debug!(requested = %ids, found = locations.len(), "Looked up locations");
            Json(locations).into_response()
        }
    };

    Ok(response)
}
