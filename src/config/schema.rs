//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site server.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// Public site settings (origin, assets, catalog).
    pub site: SiteSettings,

    /// Legacy URL redirect tables.
    pub redirects: RedirectConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add security response headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}

/// Public-facing site settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Absolute origin used in sitemap and robots output, no trailing slash.
    pub base_url: String,

    /// Directory holding the built frontend (must contain index.html).
    pub static_dir: String,

    /// JSON tour catalog. The built-in sample catalog is used when unset.
    pub tours_path: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            static_dir: "dist".to_string(),
            tours_path: None,
        }
    }
}

/// Legacy URL redirect tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Start from the built-in tables before applying the entries below.
    pub use_builtin: bool,

    /// Exact legacy `.html` path → canonical path.
    pub legacy_paths: BTreeMap<String, String>,

    /// `?page=` value → canonical path.
    pub query_pages: BTreeMap<String, String>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            legacy_paths: BTreeMap::new(),
            query_pages: BTreeMap::new(),
        }
    }
}
