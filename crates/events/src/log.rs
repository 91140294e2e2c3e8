//! Event log subscriber.
//!
//! [`EventLog`] writes every [`PortalEvent`] to the tracing log at info
//! level. It is the only sink for published document batches, since the
//! portal keeps no storage. The loop exits when the bus is dropped.

use tokio::sync::broadcast;

use crate::bus::{event_types, PortalEvent};

pub struct EventLog;

impl EventLog {
    pub async fn run(mut receiver: broadcast::Receiver<PortalEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => Self::record(&event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event log lagged, some events were not logged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, event log shutting down");
                    break;
                }
            }
        }
    }

    fn record(event: &PortalEvent) {
        // Progress ticks are noisy; keep them at debug.
        if event.event_type == event_types::UPLOAD_PROGRESS {
            tracing::debug!(
                event_type = %event.event_type,
                entity_id = ?event.source_entity_id,
                payload = %event.payload,
                "Portal event"
            );
            return;
        }

        tracing::info!(
            event_type = %event.event_type,
            entity_type = ?event.source_entity_type,
            entity_id = ?event.source_entity_id,
            actor = ?event.actor,
            payload = %event.payload,
            "Portal event"
        );
    }
}
