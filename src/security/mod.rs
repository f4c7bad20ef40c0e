//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request
//!     → body limit (listener.max_body_bytes)
//!     → handler
//!     → headers.rs (security response headers)
//! ```

pub mod headers;

pub use headers::with_security_headers;
