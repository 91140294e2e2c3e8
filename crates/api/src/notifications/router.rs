//! Event-to-WebSocket routing.
//!
//! [`NotificationRouter`] subscribes to the portal event bus. Upload
//! progress goes to admin sessions, so the upload tab can render without
//! polling. A publish is announced to every connection, anonymous ones
//! included, so open portal pages know new documents exist.

use std::sync::Arc;

use axum::extract::ws::Message;
use kdmip_core::roles::ROLE_ADMIN;
use kdmip_events::{event_types, PortalEvent};
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Event name prefixes forwarded to WebSocket clients.
const FORWARDED_PREFIXES: &[&str] = &["upload.", "documents."];

pub struct NotificationRouter {
    ws_manager: Arc<WsManager>,
}

impl NotificationRouter {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the routing loop until the [`EventBus`](kdmip_events::EventBus)
    /// is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<PortalEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.route_event(&event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to route event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    async fn route_event(&self, event: &PortalEvent) -> Result<(), serde_json::Error> {
        if !is_forwarded(&event.event_type) {
            return Ok(());
        }

        let text = serde_json::to_string(&ws_message(event))?;
        let message = Message::Text(text.into());
        if is_public(&event.event_type) {
            self.ws_manager.broadcast(message).await;
            tracing::trace!(event_type = %event.event_type, "Broadcast event to WebSocket");
        } else {
            let sent = self.ws_manager.send_to_role(ROLE_ADMIN, message).await;
            tracing::trace!(event_type = %event.event_type, sent, "Pushed event to WebSocket");
        }
        Ok(())
    }
}

pub fn is_forwarded(event_type: &str) -> bool {
    FORWARDED_PREFIXES.iter().any(|p| event_type.starts_with(p))
}

/// Events every connection receives; the rest are admin-only.
pub fn is_public(event_type: &str) -> bool {
    event_type == event_types::DOCUMENTS_PUBLISHED
}

/// Wire shape of a pushed event.
pub fn ws_message(event: &PortalEvent) -> serde_json::Value {
    serde_json::json!({
        "type": event.event_type,
        "id": event.source_entity_id,
        "payload": event.payload,
        "timestamp": event.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_upload_and_publish_events_only() {
        assert!(is_forwarded(event_types::UPLOAD_PROGRESS));
        assert!(is_forwarded(event_types::DOCUMENTS_PUBLISHED));
        assert!(!is_forwarded(event_types::LOGIN_SUCCEEDED));
    }

    #[test]
    fn message_carries_type_and_source() {
        let event = PortalEvent::new(event_types::UPLOAD_PROGRESS)
            .with_source("upload", "abc")
            .with_payload(serde_json::json!({ "progress": 42.0 }));
        let msg = ws_message(&event);
        assert_eq!(msg["type"], "upload.progress");
        assert_eq!(msg["id"], "abc");
        assert_eq!(msg["payload"]["progress"], 42.0);
    }

    #[tokio::test]
    async fn routes_to_admin_connections() {
        let ws = Arc::new(WsManager::new());
        let mut admin_rx = ws
            .add("a".into(), Some(("admin".into(), ROLE_ADMIN.into())))
            .await;
        let mut anon_rx = ws.add("b".into(), None).await;

        let router = NotificationRouter::new(Arc::clone(&ws));
        router
            .route_event(&PortalEvent::new(event_types::UPLOAD_COMPLETED).with_source("upload", "f1"))
            .await
            .expect("route");

        let msg = admin_rx.try_recv().expect("admin receives the event");
        match msg {
            Message::Text(text) => assert!(text.as_str().contains("upload.completed")),
            other => panic!("Expected Text, got {other:?}"),
        }
        assert!(anon_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publish_reaches_every_connection() {
        let ws = Arc::new(WsManager::new());
        let mut admin_rx = ws
            .add("a".into(), Some(("admin".into(), ROLE_ADMIN.into())))
            .await;
        let mut anon_rx = ws.add("b".into(), None).await;

        let router = NotificationRouter::new(Arc::clone(&ws));
        router
            .route_event(&PortalEvent::new(event_types::DOCUMENTS_PUBLISHED))
            .await
            .expect("route");

        for rx in [&mut admin_rx, &mut anon_rx] {
            match rx.try_recv().expect("every connection receives the publish") {
                Message::Text(text) => assert!(text.as_str().contains("documents.published")),
                other => panic!("Expected Text, got {other:?}"),
            }
        }
        assert!(!is_public(event_types::UPLOAD_PROGRESS));
    }
}
