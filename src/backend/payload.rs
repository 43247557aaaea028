//! Wire payloads for the DeepStream REST backend
//!
//! The `nvmultiurisrcbin` REST endpoint consumes sensor change events in a
//! fixed envelope shape.

use serde::Serialize;

/// Envelope for a `camera_add` event
#[derive(Debug, Clone, Serialize)]
pub struct CameraAddEvent {
    key: &'static str,
    value: CameraDescriptor,
    headers: EventHeaders,
}

#[derive(Debug, Clone, Serialize)]
struct CameraDescriptor {
    camera_id: String,
    camera_name: String,
    camera_url: String,
    change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct EventHeaders {
    source: &'static str,
}

impl CameraAddEvent {
    /// Build the event for a newly admitted slot
    pub fn new(index: u32, source_uri: &str) -> Self {
        Self {
            key: "sensor",
            value: CameraDescriptor {
                camera_id: format!("api_{}", index),
                camera_name: format!("Stream {}", index),
                camera_url: source_uri.to_string(),
                change: "camera_add",
            },
            headers: EventHeaders { source: "app" },
        }
    }
}
