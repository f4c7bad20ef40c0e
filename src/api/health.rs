use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub tours: usize,
}

pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tours: state.catalog.len(),
    })
}
