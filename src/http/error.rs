//! Error responses for the JSON API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid payload: {}", .0.join("; "))]
    InvalidPayload(Vec<String>),

    #[error("Tour `{0}` not found")]
    TourNotFound(String),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::TourNotFound(_) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Catalog(CatalogError::OutOfRange { .. }) => StatusCode::BAD_REQUEST,
            AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = match &self {
            AppError::InvalidPayload(problems) => json!({
                "error": "invalid payload",
                "details": problems,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidPayload(vec!["x".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::TourNotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Catalog(CatalogError::OutOfRange { index: 9, len: 2 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Catalog(CatalogError::EmptySlug(0)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_payload_message() {
        let err = AppError::InvalidPayload(vec![
            "name is required".into(),
            "email is not a valid address".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid payload: name is required; email is not a valid address"
        );
    }
}
