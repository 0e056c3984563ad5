//! # HTTP Server
//!
//! Combines the component and health routers behind CORS and request
//! tracing layers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::component_routes::{component_routes, ComponentsState};
use super::config::ServerConfig;
use super::health_routes::health_routes;
use crate::store::{ComponentStore, FileStore, MemoryStore, StoreResult};

/// HTTP server for the component store
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with the default configuration and an in-memory store
    pub fn new() -> Self {
        Self::with_state(ServerConfig::default(), ComponentsState::new())
    }

    /// Create a server whose store is chosen by `config.data_dir`
    pub fn from_config(config: ServerConfig) -> StoreResult<Self> {
        let store = open_store(&config)?;
        Ok(Self::with_state(config, ComponentsState::with_store(store)))
    }

    /// Create a server around prepared collaborators
    pub fn with_state(config: ServerConfig, state: ComponentsState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    fn build_router(config: &ServerConfig, state: Arc<ComponentsState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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
            .merge(component_routes(state))
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

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(addr = %listener.local_addr()?, "listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// File-backed store when a data directory is configured, memory otherwise
pub fn open_store(config: &ServerConfig) -> StoreResult<Arc<dyn ComponentStore>> {
    match &config.data_dir {
        Some(dir) => {
            let store = FileStore::open(dir)?;
            tracing::info!(dir = %store.dir().display(), "using file store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("no data directory configured, components are kept in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
