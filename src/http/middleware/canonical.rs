//! Canonical URL middleware.
//! Runs the canonicalizer before routing and answers legacy URLs with a 301.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::canonical::{parse_query, Canonicalizer, Decision, Redirect};
use crate::http::request::request_id;
use crate::observability::metrics;

pub async fn canonical_redirect_middleware(
    State(canonicalizer): State<Arc<Canonicalizer>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let query = parse_query(req.uri().query());

    let redirect = match canonicalizer.canonicalize(req.uri().path(), &query) {
        Decision::PassThrough => return next.run(req).await,
        Decision::Redirect(redirect) => redirect,
    };

    tracing::info!(
        request_id = %request_id(req.headers()),
        method = %req.method(),
        path = %req.uri().path(),
        location = %redirect.target,
        rule = redirect.rule,
        "Redirecting to canonical URL"
    );
    metrics::record_redirect(redirect.rule);

    match redirect_response(&redirect) {
        Some(response) => response,
        None => {
            tracing::error!(
                location = %redirect.target,
                "Redirect target is not a valid Location header, passing request through"
            );
            next.run(req).await
        }
    }
}

/// Build the 301 response, or `None` if the target cannot be a header value.
pub fn redirect_response(redirect: &Redirect) -> Option<Response> {
    let location = HeaderValue::from_str(&redirect.target).ok()?;
    Some((redirect.status(), [(header::LOCATION, location)]).into_response())
}
