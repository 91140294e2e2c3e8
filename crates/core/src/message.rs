//! Messages from the Head of Institute.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::{EmptyState, FilterSet, Listing, Searchable};
use crate::types::{ymd, Date, RecordId};

pub const MESSAGES_EMPTY: EmptyState = EmptyState::with_hint("No messages found");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Policy,
    Announcement,
    Report,
    Address,
}

impl MessageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Announcement => "announcement",
            Self::Report => "report",
            Self::Address => "address",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A filter option with its display label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const MESSAGE_CATEGORIES: &[CategoryOption] = &[
    CategoryOption { value: "all", label: "All Messages" },
    CategoryOption { value: "address", label: "Addresses" },
    CategoryOption { value: "policy", label: "Policy Updates" },
    CategoryOption { value: "announcement", label: "Announcements" },
    CategoryOption { value: "report", label: "Reports" },
];

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: RecordId,
    pub title: String,
    pub date: Date,
    pub category: MessageCategory,
    pub excerpt: String,
    pub content: String,
    pub has_attachment: bool,
    pub attachment_size: Option<String>,
    pub read_time: String,
    pub priority: Priority,
}

impl Searchable for Message {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MessageFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

pub fn list(messages: &[Message], filter: &MessageFilter) -> Listing<Message> {
    let matches = FilterSet::<Message>::new()
        .search(filter.search.as_deref())
        .equals(filter.category.as_deref(), |m| m.category.as_str())
        .apply(messages);
    Listing::from_matches(matches, messages.len(), MESSAGES_EMPTY)
}

/// Detail view for a single message.
pub fn find(messages: &[Message], id: &str) -> Result<Message, CoreError> {
    messages
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound {
            entity: "Message",
            id: id.to_string(),
        })
}

#[allow(clippy::too_many_arguments)]
fn message(
    id: &str,
    title: &str,
    date: Date,
    category: MessageCategory,
    excerpt: &str,
    salutation: &str,
    attachment_size: Option<&str>,
    read_time: &str,
    priority: Priority,
) -> Message {
    // The full body opens with a salutation followed by the excerpt.
    let content = format!("{salutation}\n\n{excerpt}");
    Message {
        id: id.to_string(),
        title: title.to_string(),
        date,
        category,
        excerpt: excerpt.to_string(),
        content,
        has_attachment: attachment_size.is_some(),
        attachment_size: attachment_size.map(str::to_string),
        read_time: read_time.to_string(),
        priority,
    }
}

pub fn seed() -> Vec<Message> {
    use MessageCategory::*;

    vec![
        message(
            "1",
            "Annual Vision 2025: Advancing Petroleum Exploration Excellence",
            ymd(2025, 1, 10),
            Address,
            "As we embark on a new year, I want to share our strategic vision for advancing petroleum exploration technologies and maintaining our position as a leading research institute.",
            "Dear Faculty and Staff,",
            Some("2.1 MB"),
            "5 min read",
            Priority::High,
        ),
        message(
            "2",
            "New Safety Protocols Implementation",
            ymd(2025, 1, 5),
            Policy,
            "Following recent industry guidelines, we are implementing enhanced safety protocols across all departments to ensure the highest standards of workplace safety.",
            "Dear Team,",
            Some("1.8 MB"),
            "3 min read",
            Priority::High,
        ),
        message(
            "3",
            "Research Excellence Awards 2024 - Results",
            ymd(2024, 12, 20),
            Announcement,
            "I am pleased to announce the recipients of our annual Research Excellence Awards, recognizing outstanding contributions to petroleum exploration research.",
            "Dear Colleagues,",
            None,
            "4 min read",
            Priority::Medium,
        ),
        message(
            "4",
            "Quarterly Performance Report - Q4 2024",
            ymd(2024, 12, 15),
            Report,
            "Our institute has achieved significant milestones in Q4 2024, with notable progress in research publications, industry collaborations, and student achievements.",
            "Dear Faculty and Staff,",
            Some("3.5 MB"),
            "8 min read",
            Priority::Medium,
        ),
        message(
            "5",
            "Digital Transformation Initiative Launch",
            ymd(2024, 12, 1),
            Announcement,
            "We are launching a comprehensive digital transformation initiative to modernize our research infrastructure and enhance collaborative capabilities.",
            "Dear Team,",
            Some("2.7 MB"),
            "6 min read",
            Priority::Medium,
        ),
    ]
}
