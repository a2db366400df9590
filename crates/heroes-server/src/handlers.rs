use crate::{AppState, error::AppError, store::StoredRace};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue},
};
use serde::Deserialize;
use std::sync::Arc;

/// Header carrying the size of the whole collection.
pub const TOTAL_COUNT: &str = "x-total-count";

/// The `_start`/`_end` window the admin client sends. Both are optional; a
/// plain `GET /races` returns everything.
#[derive(Debug, Deserialize)]
pub struct Window {
    #[serde(rename = "_start")]
    pub start: Option<usize>,
    #[serde(rename = "_end")]
    pub end: Option<usize>,
}

/// # GET /races
pub async fn list_races(
    State(state): State<Arc<AppState>>,
    Query(window): Query<Window>,
) -> (HeaderMap, Json<Vec<StoredRace>>) {
    let races = state.store.window(window.start, window.end).to_vec();

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT, HeaderValue::from(state.store.len()));

    tracing::debug!(start = ?window.start, end = ?window.end, returned = races.len(), "Listing races.");
    (headers, Json(races))
}

/// # GET /races/{id}
pub async fn get_race(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoredRace>, AppError> {
    let numeric: u64 = id.parse().map_err(|_| AppError::InvalidId(id.clone()))?;
    state
        .store
        .get(numeric)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound(numeric))
}
