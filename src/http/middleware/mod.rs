//! Middleware applied to every request.

pub mod canonical;
pub mod metrics;

pub use canonical::canonical_redirect_middleware;
pub use metrics::request_metrics_middleware;
