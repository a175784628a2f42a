use std::sync::Arc;

use tokio::net::TcpListener;

use petstore_store::PetStore;

use crate::auth::{AllowAllAuth, AuthProvider};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PetStore>,
    pub auth: Arc<dyn AuthProvider>,
}

/// Pet store HTTP server.
pub struct PetServer {
    config: ServerConfig,
    state: AppState,
}

impl PetServer {
    pub fn new(config: ServerConfig, store: Arc<dyn PetStore>) -> Self {
        let state = AppState {
            store,
            auth: Arc::new(AllowAllAuth),
        };
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("pet store listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}
