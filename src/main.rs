//! Tour Site Server (v1)
//!
//! Backend for the tour operator's marketing and booking site, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────────┐
//!                        │                    TOUR SITE                         │
//!                        │                                                      │
//!   Client Request       │  ┌─────────┐    ┌──────────────┐                     │
//!   ─────────────────────┼─▶│  http   │───▶│  canonical   │──── 301 ──────────┐ │
//!                        │  │ server  │    │  redirects   │                   │ │
//!                        │  └─────────┘    └──────┬───────┘                   │ │
//!                        │                        │ pass through              │ │
//!                        │                        ▼                           │ │
//!                        │   ┌──────────┬─────────────┬──────────┐           │ │
//!                        │   │   api    │  sitemap /  │ frontend │           │ │
//!                        │   │ tours +  │  robots.txt │  (dist)  │           │ │
//!                        │   │enquiries │             │          │           │ │
//!                        │   └──────────┴─────────────┴──────────┘           │ │
//!   Client Response      │                        │                           │ │
//!   ◀────────────────────┼────────────────────────┴───────────────────────────┘ │
//!                        │                                                      │
//!                        │  Cross-cutting: config, observability, security,     │
//!                        │                 lifecycle                            │
//!                        └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tour_site::config::load_or_default;
use tour_site::lifecycle::{build_state, signals, Shutdown};
use tour_site::observability::{logging, metrics};
use tour_site::HttpServer;

#[derive(Parser)]
#[command(name = "tour-site")]
#[command(about = "Tour operator website server", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("tour-site v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.site.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let state = build_state(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, state);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => {
            result??;
            tracing::warn!("HTTP server exited before a shutdown signal");
            return Ok(());
        }
        _ = signals::wait_for_shutdown_signal() => {}
    }

    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
