//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, gate and store produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are cheap (atomic increments) and safe without an exporter

pub mod logging;
pub mod metrics;
