//! Figures and activity feeds shown on the home and admin dashboards.
//!
//! These are fixed display values, not computed from the catalog.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

/// One tile in a stats strip.
#[derive(Debug, Clone, Serialize)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Document,
    Event,
    User,
    Download,
}

/// Home-page "Recent Activity" entry.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub urgent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
}

/// Admin overview "Recent Activity" entry.
#[derive(Debug, Clone, Serialize)]
pub struct AdminActivity {
    pub id: &'static str,
    pub action: &'static str,
    pub item: &'static str,
    pub user: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeDashboard {
    pub quick_stats: Vec<StatTile>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub stats: Vec<StatTile>,
    pub recent_activity: Vec<AdminActivity>,
}

const fn tile(title: &'static str, value: &'static str, change: &'static str, trend: Trend) -> StatTile {
    StatTile {
        title,
        value,
        change,
        trend,
    }
}

pub fn home() -> HomeDashboard {
    use ActivityKind::*;
    use Trend::Increase;

    HomeDashboard {
        quick_stats: vec![
            tile("Active Circulars", "24", "+3 this week", Increase),
            tile("Upcoming Events", "8", "Next 30 days", Increase),
            tile("Faculty Members", "156", "+2 this month", Increase),
            tile("Document Downloads", "1.2K", "This month", Increase),
        ],
        recent_activity: vec![
            Activity {
                id: "1",
                kind: Document,
                title: "Safety Drill Exercise Guidelines",
                description: "New safety circular published for all departments",
                time: "2 hours ago",
                urgent: true,
            },
            Activity {
                id: "2",
                kind: Event,
                title: "Monthly Faculty Meeting",
                description: "Scheduled for January 25, 2025 at 2:00 PM",
                time: "4 hours ago",
                urgent: false,
            },
            Activity {
                id: "3",
                kind: User,
                title: "New Faculty Registration",
                description: "Dr. Priya Sharma joined Geology Department",
                time: "1 day ago",
                urgent: false,
            },
            Activity {
                id: "4",
                kind: Download,
                title: "Research Grant Application Form",
                description: "Downloaded 45 times in the last 24 hours",
                time: "1 day ago",
                urgent: false,
            },
            Activity {
                id: "5",
                kind: Document,
                title: "Library Timings Update",
                description: "Updated operating hours effective from January 20",
                time: "2 days ago",
                urgent: false,
            },
        ],
    }
}

pub fn admin_overview() -> AdminOverview {
    use ActivityStatus::*;
    use Trend::*;

    AdminOverview {
        stats: vec![
            tile("Total Documents", "1,247", "+12%", Increase),
            tile("Active Users", "89", "+5%", Increase),
            tile("Upcoming Events", "23", "+8%", Increase),
            tile("Downloads Today", "156", "-3%", Decrease),
        ],
        recent_activity: vec![
            AdminActivity {
                id: "1",
                action: "Document uploaded",
                item: "Safety Drill Exercise Guidelines",
                user: "Admin",
                time: "2 minutes ago",
                status: Completed,
            },
            AdminActivity {
                id: "2",
                action: "Event created",
                item: "Monthly Faculty Meeting",
                user: "Dr. Sharma",
                time: "15 minutes ago",
                status: Completed,
            },
            AdminActivity {
                id: "3",
                action: "Notice published",
                item: "Library Timings Update",
                user: "Admin",
                time: "1 hour ago",
                status: Pending,
            },
            AdminActivity {
                id: "4",
                action: "User registered",
                item: "New faculty member",
                user: "System",
                time: "2 hours ago",
                status: Completed,
            },
        ],
    }
}
