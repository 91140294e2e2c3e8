//! Admin document management table.

use serde::{Deserialize, Serialize};

use crate::filter::{EmptyState, FilterSet, Listing, Searchable};
use crate::report::PublicationStatus;
use crate::types::{ymd, Date, RecordId};

pub const DOCUMENT_CATEGORIES: &[&str] = &["all", "Safety", "Research", "General", "Academic"];

pub const DOCUMENTS_EMPTY: EmptyState = EmptyState::with_hint("No documents found");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Circular,
    Notice,
    Event,
    Report,
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub category: String,
    pub upload_date: Date,
    pub size: String,
    pub status: PublicationStatus,
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocumentFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

pub fn list(documents: &[Document], filter: &DocumentFilter) -> Listing<Document> {
    let matches = FilterSet::<Document>::new()
        .search(filter.search.as_deref())
        .equals(filter.category.as_deref(), |d| d.category.as_str())
        .apply(documents);
    Listing::from_matches(matches, documents.len(), DOCUMENTS_EMPTY)
}

fn document(
    id: &str,
    title: &str,
    doc_type: DocumentType,
    category: &str,
    upload_date: Date,
    size: &str,
    status: PublicationStatus,
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        doc_type,
        category: category.to_string(),
        upload_date,
        size: size.to_string(),
        status,
    }
}

pub fn seed() -> Vec<Document> {
    vec![
        document(
            "1",
            "Safety Drill Exercise - Mandatory Participation",
            DocumentType::Circular,
            "Safety",
            ymd(2025, 1, 15),
            "2.4 MB",
            PublicationStatus::Published,
        ),
        document(
            "2",
            "New Research Grant Applications",
            DocumentType::Notice,
            "Research",
            ymd(2025, 1, 14),
            "1.8 MB",
            PublicationStatus::Published,
        ),
        document(
            "3",
            "Library Timings Update",
            DocumentType::Notice,
            "General",
            ymd(2025, 1, 13),
            "0.5 MB",
            PublicationStatus::Draft,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_only_search_field() {
        let docs = seed();
        let listing = list(
            &docs,
            &DocumentFilter {
                search: Some("library".into()),
                ..Default::default()
            },
        );
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].status, PublicationStatus::Draft);

        // Category values are not part of the searchable text.
        let listing = list(
            &docs,
            &DocumentFilter {
                search: Some("general".into()),
                ..Default::default()
            },
        );
        assert!(listing.is_empty());
    }

    #[test]
    fn academic_category_has_no_documents() {
        let docs = seed();
        let listing = list(
            &docs,
            &DocumentFilter {
                category: Some("Academic".into()),
                ..Default::default()
            },
        );
        assert!(listing.is_empty());
        assert_eq!(listing.total, 3);
        assert_eq!(listing.empty_state, Some(DOCUMENTS_EMPTY));
    }
}
