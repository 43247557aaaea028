//! DeepStream control-plane server
//!
//! Run with: cargo run
//!
//! Environment:
//!   CTRL_PORT      preferred control port (fallback scan: 8080-8089)
//!   MAX_STREAMS    slot capacity (default 64)
//!   SAMPLE_URI     fallback source for add-requests without a url
//!   PUBLIC_HOST    host advertised in RTSP URLs (default 127.0.0.1)
//!   RTSP_PORT      RTSP server port (default 8554)
//!   BASE_UDP_PORT  UDP port of slot 0 (default 5000)
//!   REST_PORT      preferred DeepStream REST port (default order: 9010, 9000)

use std::sync::Arc;

use ds_control::{ControlConfig, ControlServer, LocalMounter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ds_control=info".parse()?),
        )
        .init();

    let config = ControlConfig::from_env();
    tracing::info!(
        max_streams = config.max_streams,
        rtsp_port = config.rtsp_port,
        backend_ports = ?config.backend_ports,
        "Starting control server"
    );

    let mounter = Arc::new(LocalMounter::new(&config));
    let server = ControlServer::new(config, mounter);

    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
