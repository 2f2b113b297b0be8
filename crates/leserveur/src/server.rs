//! Server instance management.

use std::net::SocketAddr;
use axum::http::HeaderValue;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// LeSeo HTTP server.
///
/// Manages the Axum server lifecycle: configuration validation, startup,
/// and graceful shutdown.
pub struct LeSeoServer {
    /// Server configuration.
    config: ServerConfig,
}

impl LeSeoServer {
    /// Create new server instance, validating the configuration.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {}", e)));
        }

        Ok(Self { config })
    }

    /// Get socket address for binding.
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.config
            .socket_addr()
            .map_err(|e| ApiError::internal(format!("Failed to parse address: {}", e)))
    }

    /// Start the server; returns when a shutdown signal arrives.
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.socket_addr()?;

        let state = AppState::new(self.config.clone());

        let origins: Vec<HeaderValue> = self
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        let cors = CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any);

        let mut app = create_router().with_state(state).layer(cors);
        if self.config.enable_logging {
            app = app.layer(TraceLayer::new_for_http());
        }

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to {}: {:?}", addr, e);
            ApiError::internal(format!("Failed to bind to {}: {}", addr, e))
        })?;

        info!(
            "Server listening on: http://{}:{}",
            self.config.host, self.config.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))
    }

    /// Get server URL.
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }
}

/// Completes when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        unix::signal(unix::SignalKind::terminate())
            .expect("Failed to install TERM handler")
            .recv()
            .await;
        info!("Received TERM signal");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default_config() {
        let server = LeSeoServer::new(ServerConfig::default());
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(LeSeoServer::new(config).is_err());
    }
}
