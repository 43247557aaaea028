//! Server configuration

use std::ops::Range;
use std::str::FromStr;
use std::time::Duration;

/// Source URI used when neither the request nor the environment supplies one.
pub const DEFAULT_SAMPLE_URI: &str =
    "file:///opt/nvidia/deepstream/deepstream/samples/streams/sample_1080p_h264.mp4";

/// Path of the stream-add endpoint on the DeepStream REST backend.
pub const BACKEND_ADD_PATH: &str = "/api/v1/stream/add";

/// Hard ceiling on `MAX_STREAMS` from the environment. The registry
/// preallocates its slot table, so an unbounded value would translate
/// directly into an allocation of that size at startup.
pub const MAX_STREAMS_CAP: u32 = 1024;

/// Control server configuration options
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Preferred control port. If unset or busy, `fallback_ports` is scanned.
    pub ctrl_port: Option<u16>,

    /// Port range scanned when no preferred port can be bound
    pub fallback_ports: Range<u16>,

    /// Maximum number of stream slots. Slots are never reused, so this is a
    /// lifetime cap, not a concurrency limit.
    pub max_streams: u32,

    /// Fallback source URI for add-requests that carry no `url`
    pub sample_uri: Option<String>,

    /// Host advertised in synthesized RTSP URLs
    pub public_host: String,

    /// RTSP server port used in synthesized URLs
    pub rtsp_port: u16,

    /// UDP port of slot 0; slot N uses `base_udp_port + N`
    pub base_udp_port: u16,

    /// DeepStream REST ports, tried in order until one accepts a connection
    pub backend_ports: Vec<u16>,

    /// Timeout for each outbound backend POST
    pub backend_timeout: Duration,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            ctrl_port: None,
            fallback_ports: 8080..8090,
            max_streams: 64,
            sample_uri: None,
            public_host: "127.0.0.1".to_string(),
            rtsp_port: 8554,
            base_udp_port: 5000,
            backend_ports: vec![9010, 9000],
            backend_timeout: Duration::from_secs(3),
        }
    }
}

impl ControlConfig {
    /// Build a configuration from environment variables.
    ///
    /// Recognized variables: `CTRL_PORT`, `MAX_STREAMS`, `SAMPLE_URI`,
    /// `PUBLIC_HOST`, `RTSP_PORT`, `BASE_UDP_PORT`, `REST_PORT`.
    /// Unparseable values are logged and ignored, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.ctrl_port = env_parse("CTRL_PORT");
        if let Some(max) = env_parse::<u32>("MAX_STREAMS") {
            if max > MAX_STREAMS_CAP {
                tracing::warn!(value = max, cap = MAX_STREAMS_CAP, "Capping MAX_STREAMS");
                config.max_streams = MAX_STREAMS_CAP;
            } else {
                config.max_streams = max;
            }
        }
        if let Ok(uri) = std::env::var("SAMPLE_URI") {
            if !uri.is_empty() {
                config.sample_uri = Some(uri);
            }
        }
        if let Ok(host) = std::env::var("PUBLIC_HOST") {
            if !host.is_empty() {
                config.public_host = host;
            }
        }
        if let Some(port) = env_parse("RTSP_PORT") {
            config.rtsp_port = port;
        }
        if let Some(port) = env_parse("BASE_UDP_PORT") {
            config.base_udp_port = port;
        }
        if let Some(port) = env_parse::<u16>("REST_PORT") {
            config.backend_ports.retain(|p| *p != port);
            config.backend_ports.insert(0, port);
        }

        config
    }

    /// Set the preferred control port
    pub fn ctrl_port(mut self, port: u16) -> Self {
        self.ctrl_port = Some(port);
        self
    }

    /// Set the fallback port range
    pub fn fallback_ports(mut self, ports: Range<u16>) -> Self {
        self.fallback_ports = ports;
        self
    }

    /// Set the slot capacity
    pub fn max_streams(mut self, max: u32) -> Self {
        self.max_streams = max;
        self
    }

    /// Set the fallback sample URI
    pub fn sample_uri(mut self, uri: impl Into<String>) -> Self {
        self.sample_uri = Some(uri.into());
        self
    }

    /// Set the host used in synthesized RTSP URLs
    pub fn public_host(mut self, host: impl Into<String>) -> Self {
        self.public_host = host.into();
        self
    }

    /// Set the backend REST ports, tried in order
    pub fn backend_ports(mut self, ports: Vec<u16>) -> Self {
        self.backend_ports = ports;
        self
    }

    /// Set the backend POST timeout
    pub fn backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();

        assert_eq!(config.ctrl_port, None);
        assert_eq!(config.fallback_ports, 8080..8090);
        assert_eq!(config.max_streams, 64);
        assert_eq!(config.sample_uri, None);
        assert_eq!(config.public_host, "127.0.0.1");
        assert_eq!(config.rtsp_port, 8554);
        assert_eq!(config.base_udp_port, 5000);
        assert_eq!(config.backend_ports, vec![9010, 9000]);
        assert_eq!(config.backend_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_builder_ctrl_port() {
        let config = ControlConfig::default().ctrl_port(8085);

        assert_eq!(config.ctrl_port, Some(8085));
    }

    #[test]
    fn test_builder_max_streams() {
        let config = ControlConfig::default().max_streams(4);

        assert_eq!(config.max_streams, 4);
    }

    // Environment mutation is process-wide, so every from_env assertion
    // lives in this one test; the other tests never read the environment.
    #[test]
    fn test_from_env_overrides_and_sanitizes() {
        std::env::set_var("CTRL_PORT", "8085");
        std::env::set_var("REST_PORT", "9000");
        std::env::set_var("MAX_STREAMS", "8");

        let config = ControlConfig::from_env();
        assert_eq!(config.ctrl_port, Some(8085));
        assert_eq!(config.max_streams, 8);
        // REST_PORT moves to the front without duplicating the default entry.
        assert_eq!(config.backend_ports, vec![9000, 9010]);

        std::env::set_var("CTRL_PORT", "not-a-port");
        std::env::set_var("MAX_STREAMS", "abc");

        let config = ControlConfig::from_env();
        assert_eq!(config.ctrl_port, None);
        assert_eq!(config.max_streams, 64);

        std::env::set_var("MAX_STREAMS", "4000000000");

        let config = ControlConfig::from_env();
        assert_eq!(config.max_streams, MAX_STREAMS_CAP);

        for key in ["CTRL_PORT", "REST_PORT", "MAX_STREAMS"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_builder_chaining() {
        let config = ControlConfig::default()
            .ctrl_port(9080)
            .fallback_ports(40000..40010)
            .max_streams(8)
            .sample_uri("rtsp://cam.local/main")
            .public_host("10.0.0.2")
            .backend_ports(vec![9000])
            .backend_timeout(Duration::from_secs(1));

        assert_eq!(config.ctrl_port, Some(9080));
        assert_eq!(config.fallback_ports, 40000..40010);
        assert_eq!(config.max_streams, 8);
        assert_eq!(config.sample_uri.as_deref(), Some("rtsp://cam.local/main"));
        assert_eq!(config.public_host, "10.0.0.2");
        assert_eq!(config.backend_ports, vec![9000]);
        assert_eq!(config.backend_timeout, Duration::from_secs(1));
    }
}
