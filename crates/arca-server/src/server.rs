use std::sync::Arc;

use tokio::net::TcpListener;

use arca_engine::ClassificationEngine;
use arca_store::ArtifactStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Arca artifact server.
///
/// Owns the injected store and engine for its whole lifecycle: opened at
/// service start, dropped at shutdown.
pub struct ArcaServer {
    config: ServerConfig,
    state: AppState,
}

impl ArcaServer {
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn ArtifactStore>,
        engine: Arc<dyn ClassificationEngine>,
    ) -> Self {
        let state = AppState::new(store, engine);
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), self.config.max_artifact_size)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("arca server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
