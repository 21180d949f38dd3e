//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (required identifying headers present?)
//!     → rejected with code 495, or passed on to the handler
//! ```
//!
//! # Design Decisions
//! - Fail closed: a request missing any required header never reaches a handler
//! - No real authentication; the headers only identify the caller

pub mod headers;

pub use headers::{validate_required_headers, HeaderValidation, REQUIRED_HEADERS};
