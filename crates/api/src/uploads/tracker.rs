//! Upload queue with simulated progress.
//!
//! Each admitted file gets one spawned timer task. On every tick the task
//! advances the file by a random step below
//! [`MAX_INCREMENT`](kdmip_core::upload::MAX_INCREMENT); once the deadline
//! passes the file is forced to completed. Timers hold a child
//! [`CancellationToken`] so removal, teardown, and shutdown stop them.
//! Updates are applied by id under the queue lock, and a tick for an id
//! that is no longer queued does nothing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use kdmip_core::error::CoreError;
use kdmip_core::types::RecordId;
use kdmip_core::upload::{
    prepare_publish, Draft, FileDescriptor, PublishBatch, UploadCategory, UploadStatus,
    UploadedFile, MAX_INCREMENT,
};
use kdmip_events::{event_types, EventBus, PortalEvent};
use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Entity name used on events and not-found errors.
const ENTITY: &str = "upload";

#[derive(Debug, Clone, Copy)]
pub struct UploadSettings {
    /// Interval between progress steps.
    pub tick: Duration,
    /// Time after admission at which a file is forced to completed.
    pub deadline: Duration,
}

/// Snapshot served by `GET /admin/uploads`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadQueue {
    pub files: Vec<UploadedFile>,
    pub draft: Draft,
}

#[derive(Default)]
struct QueueState {
    /// Insertion order is display order.
    files: IndexMap<RecordId, UploadedFile>,
    draft: Draft,
    timers: HashMap<RecordId, CancellationToken>,
}

impl QueueState {
    fn cancel_all(&mut self) -> usize {
        for token in self.timers.values() {
            token.cancel();
        }
        self.timers.clear();
        let count = self.files.len();
        self.files.clear();
        count
    }
}

struct Inner {
    queue: RwLock<QueueState>,
    event_bus: Arc<EventBus>,
    settings: UploadSettings,
    root: CancellationToken,
}

/// Shared handle to the upload queue. Cheap to clone.
#[derive(Clone)]
pub struct UploadTracker {
    inner: Arc<Inner>,
}

impl UploadTracker {
    pub fn new(event_bus: Arc<EventBus>, settings: UploadSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                queue: RwLock::new(QueueState::default()),
                event_bus,
                settings,
                root: CancellationToken::new(),
            }),
        }
    }

    pub async fn snapshot(&self) -> UploadQueue {
        let queue = self.inner.queue.read().await;
        UploadQueue {
            files: queue.files.values().cloned().collect(),
            draft: queue.draft.clone(),
        }
    }

    /// Number of files whose timer is still running.
    pub async fn active_timers(&self) -> usize {
        self.inner.queue.read().await.timers.len()
    }

    /// Admit a batch of picked files.
    ///
    /// The batch is validated as a whole: one blank name rejects all of it.
    /// Files without an explicit category take the draft's category.
    pub async fn admit(
        &self,
        descriptors: Vec<FileDescriptor>,
        category: Option<UploadCategory>,
        actor: &str,
    ) -> Result<Vec<UploadedFile>, CoreError> {
        if descriptors.is_empty() {
            return Err(CoreError::Validation("At least one file is required".into()));
        }

        let mut queue = self.inner.queue.write().await;
        let category = category.unwrap_or(queue.draft.category);
        let now = chrono::Utc::now();

        let admitted = descriptors
            .into_iter()
            .map(|d| UploadedFile::admit(uuid::Uuid::new_v4().to_string(), d, category, now))
            .collect::<Result<Vec<_>, _>>()?;

        for file in &admitted {
            queue.files.insert(file.id.clone(), file.clone());
            if file.status == UploadStatus::Uploading {
                let token = self.inner.root.child_token();
                queue.timers.insert(file.id.clone(), token.clone());
                tokio::spawn(drive(Arc::clone(&self.inner), file.id.clone(), token));
            }
        }
        drop(queue);

        for file in &admitted {
            let event_type = match file.status {
                UploadStatus::Error => event_types::UPLOAD_FAILED,
                _ => event_types::UPLOAD_ADMITTED,
            };
            self.inner.event_bus.publish(
                PortalEvent::new(event_type)
                    .with_source(ENTITY, file.id.clone())
                    .with_actor(actor)
                    .with_payload(file_payload(file)),
            );
        }

        tracing::info!(count = admitted.len(), actor = %actor, "Files admitted to upload queue");
        Ok(admitted)
    }

    pub async fn update_draft(&self, draft: Draft) -> Draft {
        let mut queue = self.inner.queue.write().await;
        queue.draft = draft;
        queue.draft.clone()
    }

    /// Remove one file, stopping its timer if still running.
    pub async fn remove(&self, id: &str, actor: &str) -> Result<UploadedFile, CoreError> {
        let removed = {
            let mut queue = self.inner.queue.write().await;
            if let Some(token) = queue.timers.remove(id) {
                token.cancel();
            }
            queue.files.shift_remove(id)
        }
        .ok_or_else(|| CoreError::NotFound {
            entity: "Upload",
            id: id.to_string(),
        })?;

        self.inner.event_bus.publish(
            PortalEvent::new(event_types::UPLOAD_REMOVED)
                .with_source(ENTITY, removed.id.clone())
                .with_actor(actor),
        );
        Ok(removed)
    }

    /// Tear down the queue: stop every timer and drop every file. The draft
    /// is kept.
    pub async fn clear(&self, actor: &str) -> usize {
        let count = self.inner.queue.write().await.cancel_all();
        self.inner.event_bus.publish(
            PortalEvent::new(event_types::UPLOAD_QUEUE_CLEARED)
                .with_actor(actor)
                .with_payload(serde_json::json!({ "count": count })),
        );
        tracing::info!(count, actor = %actor, "Upload queue cleared");
        count
    }

    /// Hand off the completed files with the draft, then reset the form.
    ///
    /// Fails without changing anything when the title is blank or no file
    /// has completed.
    pub async fn publish(&self, actor: &str) -> Result<PublishBatch, CoreError> {
        let batch = {
            let mut queue = self.inner.queue.write().await;
            let batch = prepare_publish(&queue.draft, queue.files.values())?;
            queue.cancel_all();
            queue.draft = Draft::default();
            batch
        };

        let payload = serde_json::to_value(&batch)
            .map_err(|e| CoreError::Internal(format!("Failed to encode batch: {e}")))?;
        self.inner.event_bus.publish(
            PortalEvent::new(event_types::DOCUMENTS_PUBLISHED)
                .with_actor(actor)
                .with_payload(payload),
        );
        tracing::info!(
            title = %batch.title,
            category = batch.category.label(),
            files = batch.files.len(),
            actor = %actor,
            "Documents published"
        );
        Ok(batch)
    }

    /// Stop every timer. Used on server shutdown.
    pub fn shutdown(&self) {
        self.inner.root.cancel();
    }
}

impl Inner {
    /// Apply `step` to the file with `id` and publish the outcome.
    ///
    /// Returns `None` when the id is no longer queued, otherwise the file's
    /// status after the step.
    async fn apply(
        &self,
        id: &str,
        step: impl FnOnce(&mut UploadedFile) -> bool,
    ) -> Option<UploadStatus> {
        let updated = {
            let mut queue = self.queue.write().await;
            let file = queue.files.get_mut(id)?;
            if !step(file) {
                return Some(file.status);
            }
            file.clone()
        };

        self.event_bus.publish(
            PortalEvent::new(event_types::UPLOAD_PROGRESS)
                .with_source(ENTITY, updated.id.clone())
                .with_payload(serde_json::json!({
                    "progress": updated.progress,
                    "status": updated.status,
                })),
        );
        if updated.is_completed() {
            self.event_bus.publish(
                PortalEvent::new(event_types::UPLOAD_COMPLETED)
                    .with_source(ENTITY, updated.id.clone())
                    .with_payload(file_payload(&updated)),
            );
        }
        Some(updated.status)
    }
}

/// Timer task for one file. Exits on cancellation, on completion, or when
/// the file has left the queue.
async fn drive(inner: Arc<Inner>, id: RecordId, token: CancellationToken) {
    let UploadSettings { tick, deadline } = inner.settings;
    let started = Instant::now();
    let mut ticker = tokio::time::interval_at(started + tick, tick);
    let deadline = tokio::time::sleep_until(started + deadline);
    tokio::pin!(deadline);

    loop {
        let status = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(upload_id = %id, "Upload timer cancelled");
                return;
            }
            _ = &mut deadline => {
                inner.apply(&id, UploadedFile::force_complete).await
            }
            _ = ticker.tick() => {
                let increment = rand::rng().random_range(0.0..MAX_INCREMENT);
                inner.apply(&id, |f| f.tick(increment)).await
            }
        };

        match status {
            Some(s) if !s.is_terminal() => continue,
            _ => break,
        }
    }

    inner.queue.write().await.timers.remove(&id);
}

fn file_payload(file: &UploadedFile) -> serde_json::Value {
    serde_json::to_value(file).unwrap_or_else(|e| {
        tracing::error!(error = %e, file_id = %file.id, "Failed to encode upload event payload");
        serde_json::Value::Null
    })
}
