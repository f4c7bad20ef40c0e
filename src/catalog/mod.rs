//! Tour catalog subsystem.
//!
//! # Data Flow
//! ```text
//! tours.json (or built-in sample)
//!     → store.rs (parse, check slugs)
//!     → TourCatalog (ordered, shared via Arc)
//!     → read by API handlers and the sitemap
//!     → reordered by the admin drag-to-reorder endpoint
//! ```
//!
//! # Design Decisions
//! - Vector order is display order
//! - Slugs are unique and non-empty, checked at load
//! - Reorder is a single array move under a write lock

pub mod store;
pub mod tour;

pub use store::{array_move, CatalogError, TourCatalog};
pub use tour::Tour;
