//! The compiled-in content every page reads from.

use crate::calendar::{self, CalendarEvent};
use crate::circular::{self, CircularItem};
use crate::directory::{self, Person};
use crate::document::{self, Document};
use crate::message::{self, Message};
use crate::notice::{self, Notice};
use crate::report::{self, Report};

/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub notices: Vec<Notice>,
    pub circulars: Vec<CircularItem>,
    pub messages: Vec<Message>,
    pub people: Vec<Person>,
    pub reports: Vec<Report>,
    pub documents: Vec<Document>,
    pub events: Vec<CalendarEvent>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self {
            notices: notice::seed(),
            circulars: circular::seed(),
            messages: message::seed(),
            people: directory::seed(),
            reports: report::seed(),
            documents: document::seed(),
            events: calendar::seed(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
