//! Home-page notices panel.

use serde::{Deserialize, Serialize};

use crate::filter::{EmptyState, FilterSet, Listing, Searchable};
use crate::types::{ymd, Date, RecordId};

/// Category options offered by the notices filter.
pub const NOTICE_CATEGORIES: &[&str] = &["all", "Safety", "Research", "General", "Academic", "Training"];

/// Status options offered by the notices filter.
pub const NOTICE_STATUSES: &[&str] = &["all", "urgent", "new", "updated", "normal"];

pub const NOTICES_EMPTY: EmptyState = EmptyState {
    title: "No notices found",
    message: "No notices found matching your criteria.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeType {
    Circular,
    Notice,
    Announcement,
}

/// Urgency badge shared by notices and circulars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Urgent,
    New,
    Updated,
    Normal,
}

impl NoticeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::New => "new",
            Self::Updated => "updated",
            Self::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Pdf,
    Doc,
    Excel,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    pub status: NoticeStatus,
    pub date: Date,
    pub category: String,
    pub description: String,
    pub has_attachment: bool,
    pub attachment_type: Option<AttachmentType>,
}

impl Searchable for Notice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

/// Filter state for the notices panel (`?search=&category=&status=`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NoticeFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Visible notices for the given filter state, in catalog order.
pub fn list(notices: &[Notice], filter: &NoticeFilter) -> Listing<Notice> {
    let matches = FilterSet::<Notice>::new()
        .search(filter.search.as_deref())
        .equals(filter.category.as_deref(), |n| n.category.as_str())
        .equals(filter.status.as_deref(), |n| n.status.as_str())
        .apply(notices);
    Listing::from_matches(matches, notices.len(), NOTICES_EMPTY)
}

#[allow(clippy::too_many_arguments)]
fn notice(
    id: &str,
    title: &str,
    notice_type: NoticeType,
    status: NoticeStatus,
    date: (i32, u32, u32),
    category: &str,
    description: &str,
    attachment_type: Option<AttachmentType>,
) -> Notice {
    Notice {
        id: id.to_string(),
        title: title.to_string(),
        notice_type,
        status,
        date: ymd(date.0, date.1, date.2),
        category: category.to_string(),
        description: description.to_string(),
        has_attachment: attachment_type.is_some(),
        attachment_type,
    }
}

/// The compiled-in notices.
pub fn seed() -> Vec<Notice> {
    use AttachmentType::*;
    use NoticeStatus::*;
    use NoticeType::*;

    vec![
        notice(
            "1",
            "Safety Drill Exercise - Mandatory Participation",
            Circular,
            Urgent,
            (2025, 1, 15),
            "Safety",
            "All staff members are required to participate in the quarterly safety drill exercise scheduled for next week.",
            Some(Pdf),
        ),
        notice(
            "2",
            "New Research Grant Applications Open",
            Announcement,
            New,
            (2025, 1, 14),
            "Research",
            "Applications for the 2025 research grant program are now open for faculty members.",
            Some(Pdf),
        ),
        notice(
            "3",
            "Library Timings Update",
            Notice,
            Updated,
            (2025, 1, 13),
            "General",
            "Updated library operating hours effective from January 20, 2025.",
            None,
        ),
        notice(
            "4",
            "Monthly Faculty Meeting - January 2025",
            Notice,
            Normal,
            (2025, 1, 12),
            "Academic",
            "Monthly faculty meeting scheduled for January 25, 2025, at 2:00 PM in the main conference hall.",
            Some(Doc),
        ),
        notice(
            "5",
            "Annual Training Program Schedule",
            Circular,
            New,
            (2025, 1, 11),
            "Training",
            "Annual training program for technical staff - schedule and enrollment details.",
            Some(Excel),
        ),
    ]
}
