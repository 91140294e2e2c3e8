//! Simulated document upload: the per-file record, its progress model, and
//! the publish form.
//!
//! Nothing here touches timers. The runtime in `kdmip-api` drives
//! [`UploadedFile::tick`] and [`UploadedFile::force_complete`] on its own
//! schedule; this module only decides what each step does to a record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};

/// Upper bound (exclusive) of a single random progress increment.
pub const MAX_INCREMENT: f64 = 30.0;

pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Extensions offered by the file picker, lowercase with the leading dot.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".jpg", ".jpeg", ".png",
];

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    #[default]
    Circular,
    Notice,
    Event,
    Report,
    Safety,
    Research,
}

impl UploadCategory {
    pub const ALL: [UploadCategory; 6] = [
        Self::Circular,
        Self::Notice,
        Self::Event,
        Self::Report,
        Self::Safety,
        Self::Research,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Circular => "Circular",
            Self::Notice => "Notice",
            Self::Event => "Event",
            Self::Report => "Report",
            Self::Safety => "Safety Document",
            Self::Research => "Research Paper",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub value: UploadCategory,
    pub label: &'static str,
}

pub fn categories() -> Vec<CategoryEntry> {
    UploadCategory::ALL
        .into_iter()
        .map(|value| CategoryEntry {
            value,
            label: value.label(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// File record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

impl UploadStatus {
    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Uploading)
    }
}

/// What the client tells us about a picked file. The bytes never arrive.
#[derive(Debug, Clone, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub id: RecordId,
    pub name: String,
    /// Human-readable, e.g. `1.5 KB`.
    pub size: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub category: UploadCategory,
    pub status: UploadStatus,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub upload_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadedFile {
    /// Admit a picked file into the queue.
    ///
    /// A file whose extension is not accepted is admitted directly in the
    /// `error` state so the client can show it alongside the others.
    pub fn admit(
        id: RecordId,
        descriptor: FileDescriptor,
        category: UploadCategory,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let name = descriptor.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("File name is required".into()));
        }

        let (status, error) = if has_accepted_extension(name) {
            (UploadStatus::Uploading, None)
        } else {
            (
                UploadStatus::Error,
                Some(format!(
                    "Unsupported file type. Accepted: {}",
                    ACCEPTED_EXTENSIONS.join(", ")
                )),
            )
        };

        Ok(Self {
            id,
            name: name.to_string(),
            size: format_file_size(descriptor.size_bytes),
            mime_type: descriptor.mime_type,
            category,
            status,
            progress: 0.0,
            upload_date: now,
            error,
        })
    }

    /// Apply one timer tick. Returns `false` when the record is terminal and
    /// nothing changed.
    pub fn tick(&mut self, increment: f64) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.progress = advance(self.progress, increment);
        if self.progress >= PROGRESS_COMPLETE {
            self.status = UploadStatus::Completed;
        }
        true
    }

    /// Deadline reached: jump straight to completed.
    pub fn force_complete(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.progress = PROGRESS_COMPLETE;
        self.status = UploadStatus::Completed;
        true
    }

    pub fn is_completed(&self) -> bool {
        self.status == UploadStatus::Completed
    }
}

/// One random-walk step: never decreases, never exceeds 100.
pub fn advance(progress: f64, increment: f64) -> f64 {
    (progress + increment.max(0.0)).min(PROGRESS_COMPLETE)
}

pub fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Format a byte count with 1024-based units, at most two decimals,
/// trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

// ---------------------------------------------------------------------------
// Publish form
// ---------------------------------------------------------------------------

/// Title, description, and category typed into the upload form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: UploadCategory,
}

/// A batch handed off on publish.
#[derive(Debug, Clone, Serialize)]
pub struct PublishBatch {
    pub title: String,
    pub description: String,
    pub category: UploadCategory,
    pub files: Vec<UploadedFile>,
}

/// Validate the form and collect the completed files.
///
/// Files still uploading or in error are left out of the batch.
pub fn prepare_publish<'a>(
    draft: &Draft,
    files: impl IntoIterator<Item = &'a UploadedFile>,
) -> Result<PublishBatch, CoreError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Document title is required".into()));
    }

    let completed: Vec<UploadedFile> = files
        .into_iter()
        .filter(|f| f.is_completed())
        .cloned()
        .collect();
    if completed.is_empty() {
        return Err(CoreError::Validation(
            "At least one completed file is required".into(),
        ));
    }

    Ok(PublishBatch {
        title: title.to_string(),
        description: draft.description.trim().to_string(),
        category: draft.category,
        files: completed,
    })
}
