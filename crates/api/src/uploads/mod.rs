//! Runtime for the admin upload queue.
//!
//! The per-file state machine lives in [`kdmip_core::upload`]; this module
//! owns the shared queue, the per-file timer tasks, and publish.

pub mod tracker;

pub use tracker::{UploadQueue, UploadSettings, UploadTracker};
