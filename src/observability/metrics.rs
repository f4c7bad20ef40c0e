//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_redirects_total` (counter): canonical redirects by rule
//! - `site_enquiries_total` (counter): accepted enquiries by kind
//!
//! # Design Decisions
//! - Recording is a no-op until the exporter is installed
//! - Prometheus exporter runs on its own listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

pub fn record_request(method: &str, status: u16, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    counter!("site_requests_total", &labels).increment(1);
    histogram!("site_request_duration_seconds", &labels).record(start_time.elapsed().as_secs_f64());
}

pub fn record_redirect(rule: &'static str) {
    counter!("site_redirects_total", "rule" => rule).increment(1);
}

pub fn record_enquiry(kind: &'static str) {
    counter!("site_enquiries_total", "kind" => kind).increment(1);
}
