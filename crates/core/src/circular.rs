//! Events & Circulars page: circulars, events, notices, and announcements
//! in one list, split into tabs.

use serde::{Deserialize, Serialize};

use crate::filter::{EmptyState, FilterSet, Listing, Searchable, FILTER_ALL};
use crate::notice::NoticeStatus;
use crate::types::{ymd, Date, RecordId};

pub const CIRCULAR_CATEGORIES: &[&str] = &["all", "Safety", "Research", "General", "Academic", "Training"];

pub const CIRCULAR_STATUSES: &[&str] = &["all", "urgent", "new", "updated", "normal"];

pub const CIRCULARS_EMPTY: EmptyState = EmptyState::with_hint("No items found");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Circular,
    Event,
    Notice,
    Announcement,
}

/// Tabs across the top of the page. `notices` groups notices and
/// announcements together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircularTab {
    All,
    Circulars,
    Events,
    Notices,
}

impl CircularTab {
    pub const ALL_TABS: [CircularTab; 4] = [Self::All, Self::Circulars, Self::Events, Self::Notices];

    /// Parse a tab id; unknown ids fall back to [`CircularTab::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or(FILTER_ALL) {
            "circulars" => Self::Circulars,
            "events" => Self::Events,
            "notices" => Self::Notices,
            _ => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Items",
            Self::Circulars => "Circulars",
            Self::Events => "Events",
            Self::Notices => "Notices",
        }
    }

    pub fn includes(self, item_type: ItemType) -> bool {
        match self {
            Self::All => true,
            Self::Circulars => item_type == ItemType::Circular,
            Self::Events => item_type == ItemType::Event,
            Self::Notices => matches!(item_type, ItemType::Notice | ItemType::Announcement),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CircularItem {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: String,
    pub date: Date,
    pub description: String,
    pub status: NoticeStatus,
    pub has_attachment: bool,
    pub attachment_size: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<u32>,
    pub tags: Vec<String>,
}

impl Searchable for CircularItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Tab header with its unfiltered item count.
#[derive(Debug, Clone, Serialize)]
pub struct TabCount {
    pub id: CircularTab,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CircularFilter {
    pub tab: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Page payload: the active tab, per-tab counts, and the visible items.
#[derive(Debug, Clone, Serialize)]
pub struct CircularPage {
    pub active_tab: CircularTab,
    pub tabs: Vec<TabCount>,
    #[serde(flatten)]
    pub listing: Listing<CircularItem>,
}

/// Counts are over the whole list, independent of the other filters.
pub fn tab_counts(items: &[CircularItem]) -> Vec<TabCount> {
    CircularTab::ALL_TABS
        .iter()
        .map(|&tab| TabCount {
            id: tab,
            name: tab.label(),
            count: items.iter().filter(|i| tab.includes(i.item_type)).count(),
        })
        .collect()
}

pub fn list(items: &[CircularItem], filter: &CircularFilter) -> CircularPage {
    let tab = CircularTab::parse(filter.tab.as_deref());
    let matches = FilterSet::<CircularItem>::new()
        .matching(move |i| tab.includes(i.item_type))
        .search(filter.search.as_deref())
        .equals(filter.category.as_deref(), |i| i.category.as_str())
        .equals(filter.status.as_deref(), |i| i.status.as_str())
        .apply(items);

    CircularPage {
        active_tab: tab,
        tabs: tab_counts(items),
        listing: Listing::from_matches(matches, items.len(), CIRCULARS_EMPTY),
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    item_type: ItemType,
    category: &'static str,
    date: Date,
    description: &'static str,
    status: NoticeStatus,
    attachment_size: Option<&'static str>,
    location: Option<&'static str>,
    attendees: Option<u32>,
    tags: &'static [&'static str],
}

impl From<Seed> for CircularItem {
    fn from(s: Seed) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title.to_string(),
            item_type: s.item_type,
            category: s.category.to_string(),
            date: s.date,
            description: s.description.to_string(),
            status: s.status,
            has_attachment: s.attachment_size.is_some(),
            attachment_size: s.attachment_size.map(str::to_string),
            location: s.location.map(str::to_string),
            attendees: s.attendees,
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

pub fn seed() -> Vec<CircularItem> {
    [
        Seed {
            id: "1",
            title: "Safety Drill Exercise - Mandatory Participation",
            item_type: ItemType::Circular,
            category: "Safety",
            date: ymd(2025, 1, 15),
            description: "All staff members are required to participate in the quarterly safety drill exercise scheduled for next week. This is a mandatory exercise as per ONGC safety protocols.",
            status: NoticeStatus::Urgent,
            attachment_size: Some("2.4 MB"),
            location: None,
            attendees: None,
            tags: &["Safety", "Mandatory", "Drill"],
        },
        Seed {
            id: "2",
            title: "Annual Research Conference 2025",
            item_type: ItemType::Event,
            category: "Research",
            date: ymd(2025, 2, 15),
            description: "Join us for the Annual Research Conference showcasing latest developments in petroleum exploration and geological research.",
            status: NoticeStatus::New,
            attachment_size: Some("1.8 MB"),
            location: Some("Main Auditorium"),
            attendees: Some(200),
            tags: &["Research", "Conference", "Annual"],
        },
        Seed {
            id: "3",
            title: "Library Timings Update",
            item_type: ItemType::Notice,
            category: "General",
            date: ymd(2025, 1, 13),
            description: "Updated library operating hours effective from January 20, 2025. New timings: Monday-Friday 8:00 AM to 8:00 PM, Saturday 9:00 AM to 5:00 PM.",
            status: NoticeStatus::Updated,
            attachment_size: None,
            location: None,
            attendees: None,
            tags: &["Library", "Timings", "Update"],
        },
        Seed {
            id: "4",
            title: "Monthly Faculty Meeting",
            item_type: ItemType::Event,
            category: "Academic",
            date: ymd(2025, 1, 25),
            description: "Monthly faculty meeting to discuss academic progress, upcoming events, and administrative matters.",
            status: NoticeStatus::Normal,
            attachment_size: Some("0.8 MB"),
            location: Some("Conference Hall A"),
            attendees: Some(45),
            tags: &["Faculty", "Meeting", "Monthly"],
        },
        Seed {
            id: "5",
            title: "New Research Grant Applications Open",
            item_type: ItemType::Announcement,
            category: "Research",
            date: ymd(2025, 1, 14),
            description: "Applications for the 2025 research grant program are now open for faculty members. Deadline for submission is March 15, 2025.",
            status: NoticeStatus::New,
            attachment_size: Some("3.2 MB"),
            location: None,
            attendees: None,
            tags: &["Research", "Grant", "Application"],
        },
    ]
    .into_iter()
    .map(CircularItem::from)
    .collect()
}
