//! Readable HTTP status codes.
//!
//! Named constants for the recognized HTTP status codes, so code can say
//! `status == NOT_FOUND` instead of `status == 404`, and a lookup for the
//! text that goes with them:
//!
//! ```
//! use readable_http_codes::{status_text, NOT_FOUND};
//!
//! assert_eq!(status_text(NOT_FOUND, false), Some("Not Found"));
//! assert_eq!(status_text(NOT_FOUND, true), Some("CLIENT ERROR: Not Found"));
//! assert_eq!(status_text(999, false), None);
//! ```

mod category;
pub mod codes;
mod text;

pub use category::StatusCategory;
pub use codes::*;
pub use text::{status_text, status_text_plain, status_text_with_prefix};
