//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bank_requests_total` (counter): requests by method, route, status
//! - `bank_request_duration_seconds` (histogram): latency distribution
//! - `bank_gate_rejections_total` (counter): requests stopped by the header gate
//! - `bank_password_writes_total` (counter): password file writes by outcome
//! - `bank_messages_total` (counter): message creations and deletions
//!
//! Recording is a no-op until [`init_metrics`] installs an exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "bank_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "bank_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a request rejected for missing headers.
pub fn record_gate_rejection(missing: usize) {
    metrics::counter!("bank_gate_rejections_total").increment(1);
    metrics::histogram!("bank_gate_missing_headers").record(missing as f64);
}

/// Record the outcome of a password file write.
pub fn record_password_write(persisted: bool) {
    let outcome = if persisted { "persisted" } else { "memory_only" };
    metrics::counter!("bank_password_writes_total", "outcome" => outcome).increment(1);
}

/// Record a message store mutation ("created" or "deleted").
pub fn record_message_event(event: &'static str) {
    metrics::counter!("bank_messages_total", "event" => event).increment(1);
}
