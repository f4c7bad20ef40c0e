use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::enquiry::{ContactRequest, CustomizeTourRequest, Enquiry, Receipt};
use crate::http::error::AppError;
use crate::http::request::request_id;
use crate::observability::metrics;

pub async fn submit_contact(
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Receipt>), AppError> {
    let Json(req) = payload?;
    let receipt = accept(&headers, &req)?;

    tracing::info!(
        id = %receipt.id,
        name = %req.name,
        email = %req.email,
        phone = ?req.phone,
        message_len = req.message.len(),
        "Contact enquiry received"
    );
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

pub async fn submit_customize_tour(
    headers: HeaderMap,
    payload: Result<Json<CustomizeTourRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Receipt>), AppError> {
    let Json(req) = payload?;
    let receipt = accept(&headers, &req)?;

    tracing::info!(
        id = %receipt.id,
        name = %req.name,
        email = %req.email,
        destinations = ?req.destinations,
        travelers = req.travelers,
        start_date = ?req.start_date,
        duration_days = ?req.duration_days,
        budget = ?req.budget,
        "Customize-tour enquiry received"
    );
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

fn accept(headers: &HeaderMap, enquiry: &impl Enquiry) -> Result<Receipt, AppError> {
    if let Err(problems) = enquiry.validate() {
        tracing::debug!(
            request_id = %request_id(headers),
            kind = enquiry.kind(),
            problems = ?problems,
            "Enquiry rejected"
        );
        return Err(AppError::InvalidPayload(problems));
    }

    metrics::record_enquiry(enquiry.kind());
    let receipt = Receipt::received();
    tracing::debug!(
        request_id = %request_id(headers),
        id = %receipt.id,
        kind = enquiry.kind(),
        "Enquiry accepted"
    );
    Ok(receipt)
}
