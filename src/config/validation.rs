//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check redirect table shape (legacy keys end in `.html`, targets are paths)
//! - Reject targets that cannot be sent as a `Location` header
//! - Detect redirect loops (a target that would itself be redirected)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::canonical::{Canonicalizer, Decision, RedirectTables};
use crate::config::schema::SiteConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("listener.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("site.base_url `{0}` must be an absolute http(s) URL")]
    BaseUrl(String),

    #[error("site.base_url `{0}` must not end with `/`")]
    BaseUrlTrailingSlash(String),

    #[error("redirects.legacy_paths key `{0}` must start with `/` and end with `.html`")]
    LegacyKey(String),

    #[error("redirects.query_pages key must not be empty")]
    EmptyPageKey,

    #[error("redirect target `{target}` for `{source_key}` must start with `/`")]
    TargetNotPath { source_key: String, target: String },

    #[error("redirect target `{target}` for `{source_key}` is not a valid Location header value")]
    InvalidTarget { source_key: String, target: String },

    #[error("redirect target `{target}` for `{source_key}` is itself redirected by rule {rule}")]
    RedirectLoop {
        source_key: String,
        target: String,
        rule: &'static str,
    },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    validate_base_url(&config.site.base_url, &mut errors);
    validate_redirects(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_base_url(base_url: &str, errors: &mut Vec<ValidationError>) {
    match url::Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            if base_url.ends_with('/') {
                errors.push(ValidationError::BaseUrlTrailingSlash(base_url.to_string()));
            }
        }
        _ => errors.push(ValidationError::BaseUrl(base_url.to_string())),
    }
}

fn validate_redirects(config: &SiteConfig, errors: &mut Vec<ValidationError>) {
    let redirects = &config.redirects;

    for key in redirects.legacy_paths.keys() {
        if !key.starts_with('/') || !key.ends_with(".html") {
            errors.push(ValidationError::LegacyKey(key.clone()));
        }
    }

    if redirects.query_pages.keys().any(|k| k.is_empty()) {
        errors.push(ValidationError::EmptyPageKey);
    }

    let tables = RedirectTables::from_config(redirects);
    let canonicalizer = Canonicalizer::new(Arc::new(tables));
    let no_query = HashMap::new();

    let legacy = canonicalizer
        .tables()
        .legacy_paths
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()));
    let pages = canonicalizer
        .tables()
        .query_pages
        .iter()
        .map(|(k, v)| (format!("?page={k}"), v.to_string()));

    let mut entries: Vec<(String, String)> = legacy.chain(pages).collect();
    entries.sort();

    for (source_key, target) in entries {
        if !target.starts_with('/') {
            errors.push(ValidationError::TargetNotPath { source_key, target });
            continue;
        }

        if HeaderValue::from_str(&target).is_err() {
            errors.push(ValidationError::InvalidTarget { source_key, target });
            continue;
        }

        if let Decision::Redirect(r) = canonicalizer.canonicalize(&target, &no_query) {
            errors.push(ValidationError::RedirectLoop {
                source_key,
                target,
                rule: r.rule,
            });
        }
    }
}
