pub mod metrics;
pub mod required_headers;

pub use metrics::track_metrics;
pub use required_headers::required_headers_middleware;
