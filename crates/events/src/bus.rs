//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` across the application. The
//! upload tracker publishes on it; the event log and the WebSocket bridge
//! subscribe.

use chrono::Utc;
use kdmip_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event names published by the portal.
pub mod event_types {
    pub const UPLOAD_ADMITTED: &str = "upload.admitted";
    pub const UPLOAD_PROGRESS: &str = "upload.progress";
    pub const UPLOAD_COMPLETED: &str = "upload.completed";
    pub const UPLOAD_FAILED: &str = "upload.failed";
    pub const UPLOAD_REMOVED: &str = "upload.removed";
    pub const UPLOAD_QUEUE_CLEARED: &str = "upload.queue_cleared";
    pub const DOCUMENTS_PUBLISHED: &str = "documents.published";
    pub const LOGIN_SUCCEEDED: &str = "auth.login_succeeded";
    pub const LOGIN_FAILED: &str = "auth.login_failed";
}

// ---------------------------------------------------------------------------
// PortalEvent
// ---------------------------------------------------------------------------

/// Something that happened in the portal.
///
/// Built with [`PortalEvent::new`] and the `with_*` methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalEvent {
    /// Dot-separated event name, e.g. `"upload.progress"`.
    pub event_type: String,

    /// Kind of the record the event is about (e.g. `"upload"`).
    pub source_entity_type: Option<String>,

    pub source_entity_id: Option<RecordId>,

    /// Session subject that triggered the event, if any.
    pub actor: Option<String>,

    pub payload: serde_json::Value,

    pub timestamp: Timestamp,
}

impl PortalEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source_entity_type: None,
            source_entity_id: None,
            actor: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: impl Into<RecordId>) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

const DEFAULT_CAPACITY: usize = 1024;

/// Fan-out bus. Every subscriber independently receives every event.
///
/// ```rust
/// use kdmip_events::bus::{EventBus, PortalEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(PortalEvent::new("upload.admitted"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<PortalEvent>,
}

impl EventBus {
    /// When the buffer is full the oldest events are dropped and slow
    /// receivers see `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Events published with no subscribers are dropped.
    pub fn publish(&self, event: PortalEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PortalEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
