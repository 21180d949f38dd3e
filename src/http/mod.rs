//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span)
//!     → middleware/required_headers.rs (header gate, code 495)
//!     → api::* handler (field checks, store access)
//!     → response.rs (success or error envelope)
//!     → Send to client
//! ```

pub mod extract;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, ApiResponse, ApiResult, ErrorResponse};
pub use server::{AppState, HttpServer};
