//! Header search box: one free-text term across every public listing.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::circular::CircularItem;
use crate::directory::Person;
use crate::filter::{normalize_term, EmptyState, FilterSet, Searchable};
use crate::message::Message;
use crate::notice::Notice;
use crate::report::Report;

pub const SEARCH_EMPTY: EmptyState = EmptyState::with_hint("No results found");

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub notices: Vec<Notice>,
    pub circulars: Vec<CircularItem>,
    pub messages: Vec<Message>,
    pub people: Vec<Person>,
    pub reports: Vec<Report>,
    pub total: usize,
    pub empty_state: Option<EmptyState>,
}

fn hits<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    FilterSet::<T>::new()
        .search(Some(term))
        .apply(items)
        .into_iter()
        .cloned()
        .collect()
}

/// A blank query searches nothing and returns the empty state.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> SearchResults {
    let Some(term) = normalize_term(query.q.as_deref()) else {
        return SearchResults {
            query: String::new(),
            notices: Vec::new(),
            circulars: Vec::new(),
            messages: Vec::new(),
            people: Vec::new(),
            reports: Vec::new(),
            total: 0,
            empty_state: Some(SEARCH_EMPTY),
        };
    };

    let notices = hits(&catalog.notices, &term);
    let circulars = hits(&catalog.circulars, &term);
    let messages = hits(&catalog.messages, &term);
    let people = hits(&catalog.people, &term);
    let reports = hits(&catalog.reports, &term);
    let total = notices.len() + circulars.len() + messages.len() + people.len() + reports.len();

    SearchResults {
        query: term,
        notices,
        circulars,
        messages,
        people,
        reports,
        total,
        empty_state: (total == 0).then_some(SEARCH_EMPTY),
    }
}
