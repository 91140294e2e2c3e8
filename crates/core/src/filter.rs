//! Generic filter, search, and sort engine shared by every listing.
//!
//! A [`FilterSet`] is a conjunction of predicates built from field accessors:
//! free-text search over a record's [`Searchable`] fields, exact equality on
//! enum-like string fields (with the [`FILTER_ALL`] sentinel), and arbitrary
//! custom predicates. Applying it is a pure projection over a fixed slice;
//! nothing is cached between queries.

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::Date;

/// Sentinel filter value meaning "impose no constraint on this dimension".
pub const FILTER_ALL: &str = "all";

/// Shared body text for listing empty states.
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search criteria or filters";

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Records that participate in free-text search.
pub trait Searchable {
    /// The text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Whether a selected filter value imposes no constraint.
///
/// Absent, empty, and [`FILTER_ALL`] all mean "show everything".
pub fn is_unconstrained(selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(value) => value.is_empty() || value == FILTER_ALL,
    }
}

/// Normalize a raw search term into a lowercase needle.
///
/// Returns `None` for absent or whitespace-only input, which callers treat
/// as "no constraint". Surrounding whitespace is trimmed before matching,
/// so `" safety"` and `"safety"` select the same records.
pub fn normalize_term(term: Option<&str>) -> Option<String> {
    let trimmed = term?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match of `needle` (already lowercased)
/// against any of the record's searchable fields.
pub fn matches_search<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;

/// Conjunction of predicates over records of type `T`.
///
/// ```
/// use kdmip_core::filter::FilterSet;
/// use kdmip_core::notice::{self, Notice};
///
/// let notices = notice::seed();
/// let urgent = FilterSet::<Notice>::new()
///     .search(Some("safety"))
///     .equals(Some("urgent"), |n| n.status.as_str())
///     .apply(&notices);
/// assert_eq!(urgent.len(), 1);
/// ```
pub struct FilterSet<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T: 'a> FilterSet<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Require `field(record)` to equal `selected` exactly (case-sensitive).
    ///
    /// No predicate is added when `selected` is unconstrained.
    pub fn equals(mut self, selected: Option<&str>, field: fn(&T) -> &str) -> Self {
        let Some(wanted) = selected.filter(|s| !is_unconstrained(Some(*s))) else {
            return self;
        };
        let wanted = wanted.to_string();
        self.predicates
            .push(Box::new(move |item: &T| field(item) == wanted));
        self
    }

    /// Add an arbitrary predicate (tab groupings, date windows).
    pub fn matching(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether a single record satisfies every active predicate.
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Project `items` onto the records matching every predicate,
    /// preserving their original order.
    pub fn apply<'s>(&self, items: &'s [T]) -> Vec<&'s T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl<'a, T: Searchable + 'a> FilterSet<'a, T> {
    /// Require the search term to appear in at least one searchable field.
    pub fn search(mut self, term: Option<&str>) -> Self {
        let Some(needle) = normalize_term(term) else {
            return self;
        };
        self.predicates
            .push(Box::new(move |item: &T| matches_search(item, &needle)));
        self
    }
}

impl<'a, T: 'a> Default for FilterSet<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort orders offered by listings, each parameterized by a field accessor.
pub enum SortKey<T> {
    /// Newest first.
    DateDesc(fn(&T) -> Date),
    /// Case-insensitive lexicographic ascending.
    TextAsc(fn(&T) -> &str),
    /// Largest first.
    NumberDesc(fn(&T) -> u64),
}

/// Stable in-place sort; records comparing equal keep their relative order.
pub fn sort_records<T>(records: &mut [&T], key: &SortKey<T>) {
    match key {
        SortKey::DateDesc(field) => records.sort_by(|a, b| field(*b).cmp(&field(*a))),
        SortKey::TextAsc(field) => records.sort_by(|a, b| compare_text(field(*a), field(*b))),
        SortKey::NumberDesc(field) => records.sort_by(|a, b| field(*b).cmp(&field(*a))),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ---------------------------------------------------------------------------
// Listing output
// ---------------------------------------------------------------------------

/// Explicit "no results" state returned alongside an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

impl EmptyState {
    /// Empty state with the shared "adjust your filters" hint.
    pub const fn with_hint(title: &'static str) -> Self {
        Self {
            title,
            message: EMPTY_STATE_HINT,
        }
    }
}

/// The visible subset of a listing.
///
/// `empty_state` is populated exactly when `items` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Size of the unfiltered list.
    pub total: usize,
    pub empty_state: Option<EmptyState>,
}

impl<T: Clone> Listing<T> {
    pub fn from_matches(matches: Vec<&T>, total: usize, empty: EmptyState) -> Self {
        let items: Vec<T> = matches.into_iter().cloned().collect();
        let empty_state = items.is_empty().then_some(empty);
        Self {
            items,
            total,
            empty_state,
        }
    }
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
