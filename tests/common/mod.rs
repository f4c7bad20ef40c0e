//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tour_site::config::SiteConfig;
use tour_site::lifecycle::{build_state, Shutdown};
use tour_site::HttpServer;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Config suitable for tests: local bind, no frontend directory.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.site.base_url = "https://example.travel".into();
    config.site.static_dir = "/nonexistent/tour-site-dist".into();
    config
}

/// Start the real server with `config`.
pub async fn start_server(config: SiteConfig) -> TestServer {
    let state = build_state(&config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, state);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    TestServer { addr, shutdown }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
