/// Every catalog record and upload entry is keyed by a string id, unique within its list.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates on catalog records (`YYYY-MM-DD`).
pub type Date = chrono::NaiveDate;

/// Build a catalog date from literal parts.
///
/// Seed data only; an out-of-range literal collapses to [`Date::MIN`].
pub fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).unwrap_or(Date::MIN)
}
