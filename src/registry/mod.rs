//! Slot registry for stream admission
//!
//! The registry owns the bounded table of stream slots and hands out
//! monotonically increasing indices to add-requests. Indices are allocated
//! under a single write lock and never reused, so once `max_streams` indices
//! have been handed out every further add-request is rejected.
//!
//! ```text
//!                      Arc<SlotRegistry>
//!                 ┌──────────────────────────┐
//!                 │ next_index: u32          │
//!                 │ slots: Vec<StreamSlot> { │
//!                 │   in_use, path,          │
//!                 │   udp_port, enc_kind,    │
//!                 │ }                        │
//!                 └────────────┬─────────────┘
//!                              │
//!        ┌────────────────────┼────────────────────┐
//!        ▼                    ▼                    ▼
//!   allocate()            commit(index)        snapshot()
//!   add-request           after mount          GET /status
//! ```

pub mod error;
pub mod slot;
pub mod store;

pub use error::RegistryError;
pub use slot::{SlotInfo, StreamSlot};
pub use store::SlotRegistry;
