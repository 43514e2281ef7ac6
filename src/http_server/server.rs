//! # HTTP Server
//!
//! Main HTTP server combining the student routes with the health check
//! and the CORS/trace layers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::roster::RosterStore;

use super::config::HttpServerConfig;
use super::student_routes::{student_routes, StudentState};

/// HTTP server for the student roster API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and a freshly
    /// seeded store.
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(RosterStore::with_seed_data()))
    }

    /// Create a new HTTP server around an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<RosterStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<RosterStore>) -> Router {
        let student_state = Arc::new(StudentState::with_store(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(student_routes(student_state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!("Starting rosterd HTTP server on {}", addr);
        tracing::info!("Student API available at http://{}/students", addr);
        tracing::info!("Health check: http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Health Check
// ==================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "rosterd",
    })
}
