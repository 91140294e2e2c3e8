//! KDMIP portal event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PortalEvent`]: the event envelope carried on the bus.
//! - [`EventLog`]: background subscriber that writes every event to the
//!   tracing log. Published upload batches are reported here.

pub mod bus;
pub mod log;

pub use bus::{event_types, EventBus, PortalEvent};
pub use log::EventLog;
