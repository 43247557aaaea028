//! Control-plane HTTP server for a DeepStream video-ingestion pipeline
//!
//! The server accepts small HTTP requests (add a stream, query status),
//! allocates a bounded numeric slot index, asks the pipeline to mount the
//! slot, announces the new source to the pipeline's REST backend and
//! returns a JSON description of the created stream.
//!
//! ```text
//!   HTTP client ──► ControlServer (axum)
//!                      │ allocate()          SlotRegistry (lock-guarded,
//!                      │                     monotonic indices, bounded)
//!                      │ mount(index)        BranchMounter (pipeline seam)
//!                      │ notify_camera_add() BackendClient ──► 127.0.0.1:9010/9000
//!                      ▼
//!                   200 {streamId, ingest, rtspUrl, path, udp, encoder}
//! ```
//!
//! Pipeline construction itself (DeepStream elements, encoders, the RTSP
//! server) lives outside this crate; see [`pipeline::BranchMounter`].

pub mod backend;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod server;
pub mod source;

pub use config::ControlConfig;
pub use error::{Error, Result};
pub use pipeline::{BranchMounter, LocalMounter, MountError, MountPoint};
pub use registry::{RegistryError, SlotRegistry};
pub use server::{AppState, ControlServer};
