//! Navigation shell: top-level views, admin tabs, and sidebar links.

use serde::{Deserialize, Serialize};

use crate::roles::ROLE_ADMIN;

/// Message served by admin tabs that have no content yet.
pub const UNDER_DEVELOPMENT: &str = "This section is under development.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    EventsCirculars,
    MessagesHoi,
    Directory,
    Reports,
    Admin,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewEntry {
    pub id: View,
    pub name: &'static str,
    pub href: &'static str,
    /// Role required to open the view, if any.
    pub requires_role: Option<&'static str>,
    pub sections: Vec<NavLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    Overview,
    Documents,
    Upload,
    Users,
    Events,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        Self::Overview,
        Self::Documents,
        Self::Upload,
        Self::Users,
        Self::Events,
        Self::Settings,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == raw)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Documents => "documents",
            Self::Upload => "upload",
            Self::Users => "users",
            Self::Events => "events",
            Self::Settings => "settings",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Documents => "Document Management",
            Self::Upload => "Upload Content",
            Self::Users => "User Management",
            Self::Events => "Event Management",
            Self::Settings => "Settings",
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Users | Self::Events | Self::Settings)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminTabEntry {
    pub id: AdminTab,
    pub name: &'static str,
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickLink {
    pub name: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub views: Vec<ViewEntry>,
    pub admin_tabs: Vec<AdminTabEntry>,
    pub quick_links: Vec<QuickLink>,
}

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

fn view(id: View, name: &'static str, href: &'static str, sections: Vec<NavLink>) -> ViewEntry {
    ViewEntry {
        id,
        name,
        href,
        requires_role: None,
        sections,
    }
}

pub fn views() -> Vec<ViewEntry> {
    vec![
        view(
            View::Home,
            "Home",
            "/",
            vec![link("Dashboard", "/"), link("Quick Links", "#quick-links")],
        ),
        view(
            View::EventsCirculars,
            "Events & Circulars",
            "/events-circulars",
            vec![
                link("Latest Circulars", "/events-circulars#circulars"),
                link("Upcoming Events", "/events-circulars#events"),
                link("Training Programs", "/events-circulars#training"),
                link("Safety Notices", "/events-circulars#safety"),
            ],
        ),
        view(
            View::MessagesHoi,
            "Messages from HOI",
            "/messages-hoi",
            vec![
                link("Recent Messages", "/messages-hoi#recent"),
                link("Annual Reports", "/messages-hoi#reports"),
                link("Policy Updates", "/messages-hoi#policies"),
            ],
        ),
        view(
            View::Directory,
            "Faculty/Staff Directory",
            "/directory",
            vec![
                link("Faculty Members", "/directory#faculty"),
                link("Administrative Staff", "/directory#admin-staff"),
                link("Technical Staff", "/directory#tech-staff"),
                link("Contact Directory", "/directory#contacts"),
            ],
        ),
        view(
            View::Reports,
            "Reports & Manuals",
            "/reports",
            vec![
                link("Technical Reports", "/reports#technical"),
                link("Safety Manuals", "/reports#safety"),
                link("Training Materials", "/reports#training"),
                link("Research Publications", "/reports#research"),
            ],
        ),
        ViewEntry {
            requires_role: Some(ROLE_ADMIN),
            ..view(View::Admin, "Admin Dashboard", "/admin", Vec::new())
        },
    ]
}

pub fn admin_tabs() -> Vec<AdminTabEntry> {
    AdminTab::ALL
        .into_iter()
        .map(|tab| AdminTabEntry {
            id: tab,
            name: tab.name(),
            placeholder: tab.is_placeholder(),
        })
        .collect()
}

pub fn quick_links() -> Vec<QuickLink> {
    let internal = |name: &'static str| QuickLink {
        name,
        href: "#",
        external: false,
    };
    vec![
        QuickLink {
            name: "WebICE",
            href: "#",
            external: true,
        },
        QuickLink {
            name: "ONGC Mail",
            href: "#",
            external: true,
        },
        internal("Safety Drill Notices"),
        internal("Feedback to HOI"),
        internal("Academic Calendar"),
        internal("Library Resources"),
        internal("Staff Directory"),
        internal("Settings"),
    ]
}

pub fn navigation() -> Navigation {
    Navigation {
        views: views(),
        admin_tabs: admin_tabs(),
        quick_links: quick_links(),
    }
}
