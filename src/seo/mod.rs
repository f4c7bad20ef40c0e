//! Search-engine helpers.
//!
//! # Responsibilities
//! - Render `sitemap.xml` from the static page list and the tour catalog
//! - Render `robots.txt` pointing crawlers at the sitemap
//!
//! # Design Decisions
//! - Only canonical paths appear in the sitemap (never legacy ones)
//! - Output is rendered per request from current catalog order

pub mod robots;
pub mod sitemap;

pub use robots::render_robots;
pub use sitemap::{render_sitemap, STATIC_PAGES};
