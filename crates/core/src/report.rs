//! Reports & manuals library.

use serde::{Deserialize, Serialize};

use crate::filter::{sort_records, EmptyState, FilterSet, Listing, Searchable, SortKey};
use crate::message::CategoryOption;
use crate::types::{ymd, Date, RecordId};

pub const REPORTS_EMPTY: EmptyState = EmptyState::with_hint("No reports found");

pub const REPORT_TYPES: &[CategoryOption] = &[
    CategoryOption { value: "all", label: "All Reports" },
    CategoryOption { value: "technical", label: "Technical Reports" },
    CategoryOption { value: "safety", label: "Safety Manuals" },
    CategoryOption { value: "training", label: "Training Materials" },
    CategoryOption { value: "research", label: "Research Publications" },
];

pub const REPORT_CATEGORIES: &[&str] = &[
    "all",
    "Safety Compliance",
    "Technical Documentation",
    "Training Materials",
    "Research Publications",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Technical,
    Safety,
    Training,
    Research,
}

impl ReportType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Safety => "safety",
            Self::Training => "training",
            Self::Research => "research",
        }
    }
}

/// Publication state shared by reports and admin documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Published,
    Draft,
    Archived,
}

impl PublicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

/// Sort orders offered by the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSort {
    Date,
    Title,
    Downloads,
    /// Unrecognized sort value: catalog order.
    Unsorted,
}

impl ReportSort {
    /// Absent means the default (newest first); unknown values keep
    /// catalog order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("date") => Self::Date,
            Some("title") => Self::Title,
            Some("downloads") => Self::Downloads,
            Some(_) => Self::Unsorted,
        }
    }

    fn key(self) -> Option<SortKey<Report>> {
        match self {
            Self::Date => Some(SortKey::DateDesc(|r| r.date)),
            Self::Title => Some(SortKey::TextAsc(|r| r.title.as_str())),
            Self::Downloads => Some(SortKey::NumberDesc(|r| r.download_count)),
            Self::Unsorted => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub category: String,
    pub author: String,
    pub date: Date,
    pub description: String,
    pub file_size: String,
    pub download_count: u64,
    pub tags: Vec<String>,
    pub status: PublicationStatus,
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.author.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReportFilter {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    pub sort: ReportSort,
    #[serde(flatten)]
    pub listing: Listing<Report>,
}

pub fn list(reports: &[Report], filter: &ReportFilter) -> ReportPage {
    let sort = ReportSort::parse(filter.sort.as_deref());
    let mut matches = FilterSet::<Report>::new()
        .search(filter.search.as_deref())
        .equals(filter.report_type.as_deref(), |r| r.report_type.as_str())
        .equals(filter.category.as_deref(), |r| r.category.as_str())
        .apply(reports);

    if let Some(key) = sort.key() {
        sort_records(&mut matches, &key);
    }

    ReportPage {
        sort,
        listing: Listing::from_matches(matches, reports.len(), REPORTS_EMPTY),
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    report_type: ReportType,
    category: &'static str,
    author: &'static str,
    date: Date,
    description: &'static str,
    file_size: &'static str,
    download_count: u64,
    tags: &'static [&'static str],
}

impl From<Seed> for Report {
    fn from(s: Seed) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title.to_string(),
            report_type: s.report_type,
            category: s.category.to_string(),
            author: s.author.to_string(),
            date: s.date,
            description: s.description.to_string(),
            file_size: s.file_size.to_string(),
            download_count: s.download_count,
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            status: PublicationStatus::Published,
        }
    }
}

pub fn seed() -> Vec<Report> {
    [
        Seed {
            id: "1",
            title: "Annual Safety Assessment Report 2024",
            report_type: ReportType::Safety,
            category: "Safety Compliance",
            author: "Dr. Rajesh Kumar",
            date: ymd(2024, 12, 15),
            description: "Comprehensive safety assessment covering all operational areas, incident analysis, and recommendations for 2025.",
            file_size: "4.2 MB",
            download_count: 156,
            tags: &["Safety", "Annual", "Compliance", "Assessment"],
        },
        Seed {
            id: "2",
            title: "Petroleum Exploration Techniques Manual",
            report_type: ReportType::Technical,
            category: "Technical Documentation",
            author: "Dr. Priya Sharma",
            date: ymd(2024, 11, 20),
            description: "Updated manual covering latest petroleum exploration techniques, methodologies, and best practices.",
            file_size: "8.7 MB",
            download_count: 234,
            tags: &["Technical", "Manual", "Exploration", "Petroleum"],
        },
        Seed {
            id: "3",
            title: "Faculty Training Program Guidelines",
            report_type: ReportType::Training,
            category: "Training Materials",
            author: "Mr. Amit Singh",
            date: ymd(2024, 10, 30),
            description: "Comprehensive guidelines for faculty training programs including curriculum, assessment criteria, and certification requirements.",
            file_size: "2.1 MB",
            download_count: 89,
            tags: &["Training", "Faculty", "Guidelines", "Curriculum"],
        },
        Seed {
            id: "4",
            title: "Seismic Data Analysis Research Paper",
            report_type: ReportType::Research,
            category: "Research Publications",
            author: "Dr. Sunita Verma",
            date: ymd(2024, 9, 15),
            description: "Advanced research on seismic data analysis techniques for improved petroleum reservoir characterization.",
            file_size: "6.3 MB",
            download_count: 178,
            tags: &["Research", "Seismic", "Data Analysis", "Reservoir"],
        },
        Seed {
            id: "5",
            title: "Laboratory Equipment Maintenance Manual",
            report_type: ReportType::Technical,
            category: "Technical Documentation",
            author: "Mr. Ravi Patel",
            date: ymd(2024, 8, 25),
            description: "Detailed maintenance procedures and schedules for all laboratory equipment and instruments.",
            file_size: "3.5 MB",
            download_count: 67,
            tags: &["Technical", "Laboratory", "Maintenance", "Equipment"],
        },
    ]
    .into_iter()
    .map(Report::from)
    .collect()
}
