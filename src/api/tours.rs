use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Tour;
use crate::http::error::AppError;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub featured: bool,
}

/// Drag-to-reorder move from the admin table.
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderResponse {
    pub order: Vec<String>,
}

pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Tour>> {
    Json(state.catalog.list(params.featured))
}

pub async fn get_tour(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Tour>, AppError> {
    state
        .catalog
        .get(&slug)
        .map(Json)
        .ok_or(AppError::TourNotFound(slug))
}

pub async fn reorder_tours(
    State(state): State<AppState>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<ReorderResponse>, AppError> {
    let Json(req) = payload?;
    let order = state.catalog.reorder(req.from, req.to)?;
    Ok(Json(ReorderResponse { order }))
}
