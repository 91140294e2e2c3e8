//! Home-page event calendar and its date-window views.

use chrono::{Days, Months};
use serde::{Deserialize, Serialize};

use crate::filter::{EmptyState, FilterSet, Listing};
use crate::types::{ymd, Date, RecordId};

pub const CALENDAR_EMPTY: EmptyState = EmptyState {
    title: "No events found",
    message: "No events found for the selected period.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Training,
    Seminar,
    Workshop,
    Conference,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub date: Date,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub attendees: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarView {
    #[default]
    Upcoming,
    ThisWeek,
    ThisMonth,
}

impl CalendarView {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("this-week") => Self::ThisWeek,
            Some("this-month") => Self::ThisMonth,
            _ => Self::Upcoming,
        }
    }

    /// Inclusive `[today, end]` window. `None` as the end means open-ended.
    pub fn window(self, today: Date) -> (Date, Option<Date>) {
        let end = match self {
            Self::Upcoming => None,
            Self::ThisWeek => today.checked_add_days(Days::new(7)),
            // Month overflow clamps to the last day of the target month.
            Self::ThisMonth => today.checked_add_months(Months::new(1)),
        };
        (today, end)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CalendarQuery {
    pub view: Option<String>,
    /// Reference day; the handler substitutes the current date when absent.
    pub as_of: Option<Date>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarPage {
    pub view: CalendarView,
    pub as_of: Date,
    #[serde(flatten)]
    pub listing: Listing<CalendarEvent>,
}

pub fn list(events: &[CalendarEvent], view: CalendarView, today: Date) -> CalendarPage {
    let (start, end) = view.window(today);
    let matches = FilterSet::<CalendarEvent>::new()
        .matching(move |e| e.date >= start && end.map_or(true, |end| e.date <= end))
        .apply(events);

    CalendarPage {
        view,
        as_of: today,
        listing: Listing::from_matches(matches, events.len(), CALENDAR_EMPTY),
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    date: Date,
    time: &str,
    location: &str,
    event_type: EventType,
    attendees: u32,
    description: &str,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        date,
        time: time.to_string(),
        location: location.to_string(),
        event_type,
        attendees: Some(attendees),
        description: description.to_string(),
    }
}

pub fn seed() -> Vec<CalendarEvent> {
    use EventType::*;

    vec![
        event(
            "1",
            "Monthly Faculty Meeting",
            ymd(2025, 1, 25),
            "14:00",
            "Main Conference Hall",
            Meeting,
            45,
            "Monthly review meeting for all faculty members",
        ),
        event(
            "2",
            "Safety Training Workshop",
            ymd(2025, 1, 28),
            "10:00",
            "Training Center",
            Training,
            30,
            "Mandatory safety training for all staff members",
        ),
        event(
            "3",
            "Research Seminar: Advanced Petroleum Exploration",
            ymd(2025, 2, 2),
            "15:30",
            "Seminar Hall A",
            Seminar,
            60,
            "Latest developments in petroleum exploration techniques",
        ),
        event(
            "4",
            "Data Analysis Workshop",
            ymd(2025, 2, 5),
            "09:00",
            "Computer Lab",
            Workshop,
            25,
            "Hands-on workshop on geological data analysis",
        ),
        event(
            "5",
            "Annual Research Conference",
            ymd(2025, 2, 15),
            "09:00",
            "Main Auditorium",
            Conference,
            200,
            "Annual conference showcasing research achievements",
        ),
    ]
}
