//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (canonical redirects, tracing, limits, request ID)
//! - Serve the built frontend for everything else
//! - Bind server to listener and stop on shutdown signal

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::{self, enquiries, health, seo, tours};
use crate::canonical::Canonicalizer;
use crate::catalog::TourCatalog;
use crate::config::{SiteConfig, SiteSettings};
use crate::http::middleware::{canonical_redirect_middleware, request_metrics_middleware};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::security::with_security_headers;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub canonicalizer: Arc<Canonicalizer>,
    pub catalog: Arc<TourCatalog>,
    pub site: Arc<SiteSettings>,
}

/// HTTP server for the tour site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and state.
    pub fn new(config: SiteConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let canonicalizer = state.canonicalizer.clone();

        let api = Router::new()
            .route("/tours", get(tours::list_tours))
            .route("/tours/reorder", post(tours::reorder_tours))
            .route("/tours/{slug}", get(tours::get_tour))
            .route("/contact", post(enquiries::submit_contact))
            .route("/customize-tour", post(enquiries::submit_customize_tour))
            .fallback(api::api_not_found);

        let static_dir = Path::new(&config.site.static_dir);
        let frontend = ServeDir::new(static_dir)
            .fallback(ServeFile::new(static_dir.join("index.html")));

        let router = Router::new()
            .route("/health", get(health::get_health))
            .route("/sitemap.xml", get(seo::sitemap))
            .route("/robots.txt", get(seo::robots))
            .nest("/api", api)
            .with_state(state)
            .fallback_service(frontend)
            .layer(middleware::from_fn_with_state(
                canonicalizer,
                canonical_redirect_middleware,
            ))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        let router = if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        };

        router
            .layer(middleware::from_fn(request_metrics_middleware))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_dir = %self.config.site.static_dir,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
