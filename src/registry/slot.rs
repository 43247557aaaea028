//! Stream slot types
//!
//! This module defines the per-slot state stored in the registry.

use serde::Serialize;

use crate::pipeline::MountPoint;

/// A reserved numeric index representing one admitted video stream
#[derive(Debug, Clone)]
pub struct StreamSlot {
    /// Slot index, assigned once and never reused
    pub index: u32,

    /// Whether the slot has been wired into the pipeline
    pub in_use: bool,

    /// Local mount path (e.g. `/s3`)
    pub path: String,

    /// UDP port carrying this slot's encoded stream
    pub udp_port: u16,

    /// Encoder kind reported by the mount step (`None` until known)
    pub enc_kind: Option<String>,
}

impl StreamSlot {
    pub(super) fn empty(index: u32) -> Self {
        Self {
            index,
            in_use: false,
            path: String::new(),
            udp_port: 0,
            enc_kind: None,
        }
    }

    pub(super) fn fill(&mut self, mount: &MountPoint) {
        self.in_use = true;
        self.path = mount.path.clone();
        self.udp_port = mount.udp_port;
        self.enc_kind = mount.enc_kind.clone();
    }
}

/// Wire representation of an in-use slot, as returned by the status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SlotInfo {
    pub index: u32,
    pub path: String,
    pub udp: u16,
    pub encoder: String,
}

impl From<&StreamSlot> for SlotInfo {
    fn from(slot: &StreamSlot) -> Self {
        Self {
            index: slot.index,
            path: slot.path.clone(),
            udp: slot.udp_port,
            encoder: slot
                .enc_kind
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot = StreamSlot::empty(3);

        assert_eq!(slot.index, 3);
        assert!(!slot.in_use);
        assert!(slot.path.is_empty());
        assert_eq!(slot.udp_port, 0);
        assert!(slot.enc_kind.is_none());
    }

    #[test]
    fn test_slot_info_defaults_encoder() {
        let slot = StreamSlot {
            index: 1,
            in_use: true,
            path: "/s1".to_string(),
            udp_port: 5001,
            enc_kind: None,
        };

        let info = SlotInfo::from(&slot);
        assert_eq!(info.encoder, "unknown");
    }
}
