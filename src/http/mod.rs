//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → request.rs (request ID)
//!     → middleware/canonical.rs (301 for legacy URLs, else continue)
//!     → api handlers | sitemap/robots | frontend files
//!     → error.rs (JSON error bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
