//! HTTP server assembly.
//!
//! Combines the customer and health routers and runs them on a Tokio
//! listener.

use axum::Router;
use customer_core::db::{open_db, open_db_in_memory, DbResult};
use log::info;
use rusqlite::Connection;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::routes::{customer_routes, health_routes, AppState, CUSTOMERS_PATH};

/// HTTP server for the customer resource.
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Wires a server around an already-open store connection.
    pub fn new(config: AppConfig, conn: Connection) -> Self {
        let router = build_router(AppState::new(conn));
        Self { config, router }
    }

    /// Opens the configured database and wires a server around it.
    pub fn from_config(config: AppConfig) -> DbResult<Self> {
        let conn = if config.is_in_memory() {
            open_db_in_memory()?
        } else {
            open_db(&config.database.path)?
        };
        Ok(Self::new(config, conn))
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the configured `host:port`; hostnames are resolved.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        info!(
            "event=server_start module=api status=ok addr={} resource={}",
            listener.local_addr()?,
            CUSTOMERS_PATH
        );
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Builds the full route table over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(customer_routes(state))
}
