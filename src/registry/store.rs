//! Slot registry implementation
//!
//! The central registry that admits streams and hands out slot indices.

use tokio::sync::RwLock;

use super::error::RegistryError;
use super::slot::{SlotInfo, StreamSlot};
use crate::pipeline::MountPoint;

struct RegistryInner {
    /// Next index to hand out. Monotonic; incremented exactly once per
    /// accepted add-request and never rolled back, even when a later mount
    /// or backend step fails.
    next_index: u32,

    /// Fixed-size slot table, one entry per possible index
    slots: Vec<StreamSlot>,
}

/// Central registry for stream slots
///
/// Thread-safe via `RwLock`. Allocation is the only read-modify-write and
/// happens under the write lock, so concurrent add-requests always receive
/// distinct indices.
pub struct SlotRegistry {
    inner: RwLock<RegistryInner>,
    max_streams: u32,
}

impl SlotRegistry {
    /// Create a registry with capacity for `max_streams` slots
    pub fn new(max_streams: u32) -> Self {
        let slots = (0..max_streams).map(StreamSlot::empty).collect();

        Self {
            inner: RwLock::new(RegistryInner {
                next_index: 0,
                slots,
            }),
            max_streams,
        }
    }

    /// Get the configured capacity
    pub fn max_streams(&self) -> u32 {
        self.max_streams
    }

    /// Allocate the next slot index.
    ///
    /// Returns `CapacityExceeded` once all indices have been handed out.
    /// There is no deallocation path: a slot consumed by a request whose
    /// mount later fails stays consumed.
    pub async fn allocate(&self) -> Result<u32, RegistryError> {
        let mut inner = self.inner.write().await;

        if inner.next_index >= self.max_streams {
            return Err(RegistryError::CapacityExceeded {
                max: self.max_streams,
            });
        }

        let index = inner.next_index;
        inner.next_index += 1;

        tracing::debug!(index, remaining = self.max_streams - inner.next_index, "Slot allocated");

        Ok(index)
    }

    /// Record a successful mount for an allocated slot
    pub async fn commit(&self, index: u32, mount: &MountPoint) {
        let mut inner = self.inner.write().await;

        if let Some(slot) = inner.slots.get_mut(index as usize) {
            slot.fill(mount);

            tracing::info!(
                index,
                path = %mount.path,
                udp = mount.udp_port,
                "Slot committed"
            );
        } else {
            tracing::warn!(index, "Commit for unknown slot index");
        }
    }

    /// Enumerate in-use slots for the status endpoint
    pub async fn snapshot(&self) -> Vec<SlotInfo> {
        let inner = self.inner.read().await;

        inner
            .slots
            .iter()
            .filter(|slot| slot.in_use)
            .map(SlotInfo::from)
            .collect()
    }

    /// Number of indices handed out so far
    pub async fn allocated(&self) -> u32 {
        self.inner.read().await.next_index
    }
}
