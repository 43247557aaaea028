//! DeepStream REST backend notification
//!
//! Every admitted stream is announced to the pipeline's own REST endpoint
//! (`nvmultiurisrcbin`) so the pipeline starts pulling the source. Delivery
//! is best-effort and never blocks the add-request outcome.

pub mod client;
pub mod payload;

pub use client::BackendClient;
pub use payload::CameraAddEvent;
