//! Outbound client for the DeepStream REST backend

use std::time::Duration;

use crate::config::{ControlConfig, BACKEND_ADD_PATH};

use super::payload::CameraAddEvent;

/// Thin client that delivers sensor change events to the local pipeline
/// backend, trying each configured port in order.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    host: String,
    ports: Vec<u16>,
    timeout: Duration,
}

impl BackendClient {
    /// Create a client targeting `127.0.0.1` on the configured ports
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: "127.0.0.1".to_string(),
            ports: config.backend_ports.clone(),
            timeout: config.backend_timeout,
        }
    }

    /// Announce a newly admitted stream to the pipeline backend.
    ///
    /// Ports are tried in order; a port that answers at all (any status)
    /// counts as delivered, a connection failure moves on to the next one.
    /// Best-effort by design: total failure is logged and swallowed, the
    /// add-request still succeeds from the caller's perspective.
    pub async fn notify_camera_add(&self, index: u32, source_uri: &str) -> bool {
        let event = CameraAddEvent::new(index, source_uri);

        for &port in &self.ports {
            let url = format!("http://{}:{}{}", self.host, port, BACKEND_ADD_PATH);

            match self
                .http
                .post(&url)
                .timeout(self.timeout)
                .json(&event)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    tracing::info!(index, port, "camera_add accepted by backend");
                    return true;
                }
                Ok(response) => {
                    tracing::warn!(
                        index,
                        port,
                        status = %response.status(),
                        "camera_add rejected by backend"
                    );
                    return true;
                }
                Err(e) => {
                    tracing::debug!(index, port, error = %e, "Backend port unreachable");
                }
            }
        }

        tracing::warn!(index, ports = ?self.ports, "camera_add not delivered on any backend port");
        false
    }
}
