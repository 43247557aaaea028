//! Branch mounting seam
//!
//! Wiring a slot into the media pipeline (demux branch, encoder, RTSP mount)
//! is the job of an external collaborator. The server only needs the
//! resulting mount description, so the collaborator sits behind the
//! `BranchMounter` trait.

/// Result of wiring a slot into the pipeline
#[derive(Debug, Clone)]
pub struct MountPoint {
    /// Local mount path (e.g. `/s3`)
    pub path: String,

    /// Public RTSP URL for the mounted stream
    pub rtsp_url: String,

    /// UDP port carrying the encoded stream between pipeline and RTSP server
    pub udp_port: u16,

    /// Encoder kind used for the branch, if known
    pub enc_kind: Option<String>,
}

/// Error type for mount operations
#[derive(Debug, Clone)]
pub enum MountError {
    /// The pipeline could not wire the branch
    Failed(String),
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::Failed(reason) => write!(f, "mount failed: {}", reason),
        }
    }
}

impl std::error::Error for MountError {}

/// Materializes a slot index into a pipeline mount.
///
/// Implementations are expected to be cheap to call from request handlers;
/// anything long-running belongs inside the pipeline process itself.
pub trait BranchMounter: Send + Sync {
    /// Produce the mount for `index`, or report failure.
    ///
    /// A failure is surfaced to the HTTP caller as a 500; the allocated
    /// index is not returned to the registry.
    fn mount(&self, index: u32) -> Result<MountPoint, MountError>;
}

/// Default mounter that derives mount parameters from configuration.
///
/// Slot N maps to path `/sN`, UDP port `base_udp_port + N` and an RTSP URL
/// on the configured public host. The actual branch construction happens in
/// the pipeline process listening on those ports.
pub struct LocalMounter {
    public_host: String,
    rtsp_port: u16,
    base_udp_port: u16,
}

impl LocalMounter {
    pub fn new(config: &crate::config::ControlConfig) -> Self {
        Self {
            public_host: config.public_host.clone(),
            rtsp_port: config.rtsp_port,
            base_udp_port: config.base_udp_port,
        }
    }
}

impl BranchMounter for LocalMounter {
    fn mount(&self, index: u32) -> Result<MountPoint, MountError> {
        let udp_port = self.base_udp_port as u32 + index;
        let udp_port = u16::try_from(udp_port)
            .map_err(|_| MountError::Failed(format!("UDP port range exhausted at slot {}", index)))?;

        let path = format!("/s{}", index);
        let rtsp_url = format!("rtsp://{}:{}{}", self.public_host, self.rtsp_port, path);

        Ok(MountPoint {
            path,
            rtsp_url,
            udp_port,
            enc_kind: Some("h264".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfig;

    #[test]
    fn test_local_mounter_layout() {
        let config = ControlConfig::default();
        let mounter = LocalMounter::new(&config);

        let mount = mounter.mount(3).unwrap();
        assert_eq!(mount.path, "/s3");
        assert_eq!(mount.udp_port, 5003);
        assert_eq!(mount.rtsp_url, "rtsp://127.0.0.1:8554/s3");
        assert_eq!(mount.enc_kind.as_deref(), Some("h264"));
    }

    #[test]
    fn test_local_mounter_uses_public_host() {
        let config = ControlConfig::default().public_host("192.168.1.20");
        let mounter = LocalMounter::new(&config);

        let mount = mounter.mount(0).unwrap();
        assert_eq!(mount.rtsp_url, "rtsp://192.168.1.20:8554/s0");
    }

    #[test]
    fn test_local_mounter_udp_overflow() {
        let mut config = ControlConfig::default();
        config.base_udp_port = u16::MAX;
        let mounter = LocalMounter::new(&config);

        assert!(mounter.mount(0).is_ok());
        assert!(mounter.mount(1).is_err());
    }
}
