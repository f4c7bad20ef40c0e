//! Security response headers.
//!
//! # Responsibilities
//! - Add nosniff, frame and referrer policy headers to every response
//!
//! # Design Decisions
//! - Headers already set by a handler are left untouched
//! - Toggled by `security.enable_headers`

use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Header/value pairs added to responses.
pub const SECURITY_HEADERS: &[(HeaderName, &str)] = &[
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Wrap `router` with the security header layers.
pub fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name.clone(),
                HeaderValue::from_static(*value),
            ))
        })
}
