//! Mock banking REST backend.
//!
//! Serves canned account, customer, transfer and dashboard data behind a
//! required-header gate, with a small mutable store for the inbox, the
//! source-of-funds questionnaire and the customer password.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod store;

pub use config::BankConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Store;
