//! Pipeline-facing seams
//!
//! The media pipeline itself (DeepStream elements, encoders, RTSP server)
//! lives outside this crate. This module holds the trait boundary through
//! which the control server asks for a slot to be materialized.

pub mod mount;

pub use mount::{BranchMounter, LocalMounter, MountError, MountPoint};
