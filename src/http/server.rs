//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all banking handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Put the header gate in front of every banking route
//! - Bind server to listener and stop on the shutdown signal

use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::BankConfig;
use crate::http::middleware::{required_headers_middleware, track_metrics};
use crate::http::request::{make_request_span, request_id_header, UuidRequestId};
use crate::store::Store;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

/// HTTP server for the mock banking API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server, opening the store from the configuration.
    pub fn new(config: BankConfig) -> Self {
        let store = Arc::new(Store::open(&config.store));
        Self::with_store(&config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: &BankConfig, store: Arc<Store>) -> Self {
        let router = Self::build_router(config, AppState { store });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &BankConfig, state: AppState) -> Router {
        let cors = if config.security.cors_enabled {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        };

        api::routes()
            .route_layer(middleware::from_fn(required_headers_middleware))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id_header(), UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(PropagateRequestIdLayer::new(request_id_header()))
                    .layer(cors)
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(DefaultBodyLimit::max(config.security.max_body_size)),
            )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
