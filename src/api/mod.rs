//! HTTP handlers for the JSON API, health and SEO endpoints.

pub mod enquiries;
pub mod health;
pub mod seo;
pub mod tours;

use crate::http::error::AppError;

/// Fallback for unknown `/api/*` paths.
pub async fn api_not_found() -> AppError {
    AppError::NotFound
}
