//! Control HTTP server
//!
//! Binds the control listener and serves the admission/status API. Requests
//! are handled concurrently; the capacity invariant is upheld by the
//! registry's single allocation lock, not by serializing connections.

pub mod listener;
pub mod routes;

use std::future::Future;
use std::sync::Arc;

use axum::Router;

use crate::backend::BackendClient;
use crate::config::ControlConfig;
use crate::error::Result;
use crate::pipeline::BranchMounter;
use crate::registry::SlotRegistry;

pub use routes::ApiError;

/// Shared state carried by every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ControlConfig>,
    pub registry: Arc<SlotRegistry>,
    pub mounter: Arc<dyn BranchMounter>,
    pub backend: BackendClient,
}

/// Control-plane server
pub struct ControlServer {
    config: Arc<ControlConfig>,
    state: AppState,
}

impl ControlServer {
    /// Create a server with the given configuration and mounting collaborator
    pub fn new(config: ControlConfig, mounter: Arc<dyn BranchMounter>) -> Self {
        let registry = Arc::new(SlotRegistry::new(config.max_streams));
        let backend = BackendClient::new(&config);
        let config = Arc::new(config);

        let state = AppState {
            config: Arc::clone(&config),
            registry,
            mounter,
            backend,
        };

        Self { config, state }
    }

    /// Get a reference to the slot registry
    pub fn registry(&self) -> &Arc<SlotRegistry> {
        &self.state.registry
    }

    /// Build the router over this server's state.
    ///
    /// Exposed so tests can serve the API on a listener of their choosing.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Run the server
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(&self) -> Result<()> {
        let listener = listener::bind_control_listener(&self.config).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = listener::bind_control_listener(&self.config).await?;
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
