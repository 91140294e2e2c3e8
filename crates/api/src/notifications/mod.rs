//! Bridges the event bus to WebSocket clients.

pub mod router;

pub use router::NotificationRouter;
