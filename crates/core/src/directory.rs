//! Faculty & staff directory.

use serde::{Deserialize, Serialize};

use crate::filter::{EmptyState, FilterSet, Listing, Searchable};
use crate::message::CategoryOption;
use crate::types::RecordId;

pub const DIRECTORY_EMPTY: EmptyState = EmptyState::with_hint("No staff members found");

pub const STAFF_CATEGORIES: &[CategoryOption] = &[
    CategoryOption { value: "all", label: "All Staff" },
    CategoryOption { value: "faculty", label: "Faculty Members" },
    CategoryOption { value: "admin-staff", label: "Administrative Staff" },
    CategoryOption { value: "tech-staff", label: "Technical Staff" },
];

pub const DEPARTMENTS: &[&str] = &["all", "Administration", "Geology", "Geophysics", "Laboratory", "Research"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffCategory {
    Faculty,
    AdminStaff,
    TechStaff,
}

impl StaffCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::AdminStaff => "admin-staff",
            Self::TechStaff => "tech-staff",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: RecordId,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub category: StaffCategory,
    pub email: String,
    pub phone: String,
    pub office: String,
    pub specialization: Option<String>,
    pub experience: Option<String>,
}

impl Searchable for Person {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.designation.as_str(),
            self.department.as_str(),
        ]
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DirectoryFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
}

pub fn list(people: &[Person], filter: &DirectoryFilter) -> Listing<Person> {
    let matches = FilterSet::<Person>::new()
        .search(filter.search.as_deref())
        .equals(filter.category.as_deref(), |p| p.category.as_str())
        .equals(filter.department.as_deref(), |p| p.department.as_str())
        .apply(people);
    Listing::from_matches(matches, people.len(), DIRECTORY_EMPTY)
}

#[allow(clippy::too_many_arguments)]
fn person(
    id: &str,
    name: &str,
    designation: &str,
    department: &str,
    category: StaffCategory,
    office: &str,
    specialization: Option<&str>,
    experience: &str,
) -> Person {
    // Addresses follow `first.last@kdmip.ongc.in`, dropping the honorific.
    let local = name
        .split_whitespace()
        .skip(1)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    Person {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        department: department.to_string(),
        category,
        email: format!("{local}@kdmip.ongc.in"),
        phone: format!("+91-135-XXX-{}", 1000 + id.parse::<u32>().unwrap_or(0)),
        office: office.to_string(),
        specialization: specialization.map(str::to_string),
        experience: Some(experience.to_string()),
    }
}

pub fn seed() -> Vec<Person> {
    use StaffCategory::*;

    vec![
        person(
            "1",
            "Dr. Rajesh Kumar",
            "Head of Institute",
            "Administration",
            Faculty,
            "Room 101, Admin Block",
            Some("Petroleum Geology"),
            "25 years",
        ),
        person(
            "2",
            "Dr. Priya Sharma",
            "Professor",
            "Geology",
            Faculty,
            "Room 201, Academic Block",
            Some("Structural Geology"),
            "18 years",
        ),
        person(
            "3",
            "Mr. Amit Singh",
            "Administrative Officer",
            "Administration",
            AdminStaff,
            "Room 102, Admin Block",
            None,
            "12 years",
        ),
        person(
            "4",
            "Dr. Sunita Verma",
            "Associate Professor",
            "Geophysics",
            Faculty,
            "Room 301, Research Block",
            Some("Seismic Interpretation"),
            "15 years",
        ),
        person(
            "5",
            "Mr. Ravi Patel",
            "Technical Assistant",
            "Laboratory",
            TechStaff,
            "Lab 1, Technical Block",
            None,
            "8 years",
        ),
    ]
}
