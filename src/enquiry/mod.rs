//! Visitor enquiries: the contact form and the customize-tour form.
//!
//! # Data Flow
//! ```text
//! POST /api/contact | /api/customize-tour (JSON)
//!     → types.rs (deserialize)
//!     → validate.rs (collect every field problem)
//!     → accepted: logged, counted, answered with a Receipt
//! ```

pub mod types;
pub mod validate;

pub use types::{ContactRequest, CustomizeTourRequest, Enquiry, Receipt};
pub use validate::is_plausible_email;
