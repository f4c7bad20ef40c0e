//! Tour Site Server Library

pub mod api;
pub mod canonical;
pub mod catalog;
pub mod config;
pub mod enquiry;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod seo;

pub use canonical::{Canonicalizer, Decision};
pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
