//! Startup orchestration.
//!
//! # Responsibilities
//! - Build redirect tables and the canonicalizer from config
//! - Load the tour catalog
//! - Assemble shared application state
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::canonical::{Canonicalizer, RedirectTables};
use crate::catalog::{CatalogError, TourCatalog};
use crate::config::SiteConfig;
use crate::http::server::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Build the canonicalizer for a configuration.
pub fn build_canonicalizer(config: &SiteConfig) -> Canonicalizer {
    let tables = RedirectTables::from_config(&config.redirects);
    tracing::info!(
        legacy_paths = tables.legacy_paths.len(),
        query_pages = tables.query_pages.len(),
        "Redirect tables built"
    );
    Canonicalizer::new(Arc::new(tables))
}

/// Build all shared state for the server.
pub fn build_state(config: &SiteConfig) -> Result<AppState, StartupError> {
    let canonicalizer = build_canonicalizer(config);
    let catalog = TourCatalog::load_or_sample(config.site.tours_path.as_deref().map(Path::new))?;

    Ok(AppState {
        canonicalizer: Arc::new(canonicalizer),
        catalog: Arc::new(catalog),
        site: Arc::new(config.site.clone()),
    })
}
