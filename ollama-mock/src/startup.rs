//! Application startup and lifecycle management.

use crate::config::MockConfig;
use crate::handlers;
use crate::services::{init_metrics, spawn_upkeep, UPKEEP_INTERVAL};
use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Route table. Each Ollama path alias is its own entry pointing at the
/// shared handler.
pub fn build_router() -> Router {
    Router::new()
        .route("/v1/list", get(handlers::list_models))
        .route("/api/tags", get(handlers::list_models))
        .route("/v1/generate", post(handlers::generate))
        .route("/api/generate", post(handlers::generate))
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    /// Bind the listener and prepare the server. Port 0 picks a random port.
    pub async fn build(config: MockConfig) -> Result<Self, AppError> {
        init_metrics();
        spawn_upkeep(UPKEEP_INTERVAL);

        let addr = config.common.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let local_addr: SocketAddr = listener.local_addr()?;

        tracing::info!(
            service = %config.service_name,
            address = %local_addr,
            "Mock inference API listening"
        );

        let server = axum::serve(listener, build_router())
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        Ok(Self {
            port: local_addr.port(),
            server: Box::pin(server),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
