//! Control listener binding
//!
//! Prefers the configured control port; if that fails (or none is set) a
//! fixed fallback range is scanned. Binding nothing at all is fatal.

use tokio::net::TcpListener;

use crate::config::ControlConfig;
use crate::error::{Error, Result};

/// Bind the control listener on all interfaces
pub async fn bind_control_listener(config: &ControlConfig) -> Result<TcpListener> {
    if let Some(port) = config.ctrl_port {
        match TcpListener::bind(("0.0.0.0", port)).await {
            Ok(listener) => {
                tracing::info!(port, "Control API listening");
                return Ok(listener);
            }
            Err(e) => {
                tracing::warn!(
                    port,
                    error = %e,
                    "Configured port failed to bind; scanning fallback range"
                );
            }
        }
    }

    for port in config.fallback_ports.clone() {
        if let Ok(listener) = TcpListener::bind(("0.0.0.0", port)).await {
            tracing::info!(port, "Control API listening (fallback port)");
            return Ok(listener);
        }
    }

    tracing::error!(
        start = config.fallback_ports.start,
        end = config.fallback_ports.end,
        "No control port could be bound"
    );
    Err(Error::Bind(config.fallback_ports.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preferred_port_bound() {
        let config = ControlConfig::default()
            .ctrl_port(0)
            .fallback_ports(1..1);

        // Port 0 asks the OS for any free port, so the preferred branch wins.
        let listener = bind_control_listener(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[tokio::test]
    async fn test_busy_preferred_port_falls_back() {
        // Occupy a port, then configure it as preferred with a usable range.
        let busy = TcpListener::bind(("0.0.0.0", 0)).await.unwrap();
        let busy_port = busy.local_addr().unwrap().port();

        let config = ControlConfig::default()
            .ctrl_port(busy_port)
            .fallback_ports(41800..41810);

        let listener = bind_control_listener(&config).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!((41800..41810).contains(&port));
    }

    #[tokio::test]
    async fn test_no_port_available_is_fatal() {
        let config = ControlConfig::default().fallback_ports(1..1);

        let err = bind_control_listener(&config).await.unwrap_err();
        assert!(matches!(err, Error::Bind(_)));
    }
}
