//! Holiday interval model.
//!
//! This module contains the [`HolidayInterval`] type used to describe blocks
//! of non-working days such as public holidays or institutional closures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, DaySequence};

/// An inclusive block of non-working days.
///
/// Intervals may overlap each other. An interval whose `start` is after its
/// `end` is accepted as data and covers no days.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidayInterval;
/// use chrono::NaiveDate;
///
/// let national_day = HolidayInterval::new(
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
/// )
/// .named("National Day");
///
/// assert_eq!(national_day.dates().count(), 8);
/// assert!(national_day.contains(NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayInterval {
    /// The first non-working day (inclusive).
    pub start: NaiveDate,
    /// The last non-working day (inclusive).
    pub end: NaiveDate,
    /// The name of the holiday (e.g., "National Day").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HolidayInterval {
    /// Creates an unnamed interval.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            name: None,
        }
    }

    /// Creates an unnamed interval covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Attaches a name to the interval.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns every date the interval covers, weekends included.
    pub fn dates(&self) -> DaySequence {
        DaySequence::new(self.start, self.end)
    }

    /// Checks if a date falls inside the interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if the interval shares at least one day with `range`.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.start <= self.end && self.start <= range.end() && self.end >= range.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_dates_include_both_ends_and_weekends() {
        // 2025-10-01 (Wed) to 2025-10-08 (Wed) spans a weekend
        let interval = HolidayInterval::new(make_date("2025-10-01"), make_date("2025-10-08"));
        let dates: Vec<NaiveDate> = interval.dates().collect();
        assert_eq!(dates.len(), 8);
        assert_eq!(dates[0], make_date("2025-10-01"));
        assert_eq!(dates[7], make_date("2025-10-08"));
        assert!(dates.contains(&make_date("2025-10-04"))); // Saturday
    }

    #[test]
    fn test_inverted_interval_covers_nothing() {
        let interval = HolidayInterval::new(make_date("2025-10-08"), make_date("2025-10-01"));
        assert_eq!(interval.dates().count(), 0);
        assert!(!interval.contains(make_date("2025-10-04")));
    }

    #[test]
    fn test_single_day() {
        let interval = HolidayInterval::single_day(make_date("2026-01-01"));
        assert_eq!(interval.dates().count(), 1);
        assert!(interval.contains(make_date("2026-01-01")));
    }

    #[test]
    fn test_overlaps_range() {
        let interval = HolidayInterval::new(make_date("2025-10-01"), make_date("2025-10-08"));

        let touching_start =
            DateRange::new(make_date("2025-09-25"), make_date("2025-10-01")).unwrap();
        let touching_end = DateRange::new(make_date("2025-10-08"), make_date("2025-10-10")).unwrap();
        let before = DateRange::new(make_date("2025-09-20"), make_date("2025-09-30")).unwrap();
        let after = DateRange::new(make_date("2025-10-09"), make_date("2025-10-10")).unwrap();

        assert!(interval.overlaps(&touching_start));
        assert!(interval.overlaps(&touching_end));
        assert!(!interval.overlaps(&before));
        assert!(!interval.overlaps(&after));
    }

    #[test]
    fn test_inverted_interval_never_overlaps() {
        let interval = HolidayInterval::new(make_date("2025-10-08"), make_date("2025-10-01"));
        let range = DateRange::new(make_date("2025-09-01"), make_date("2025-10-31")).unwrap();
        assert!(!interval.overlaps(&range));
    }

    #[test]
    fn test_deserialize_without_name() {
        let json = r#"{"start": "2025-09-10", "end": "2025-09-10"}"#;
        let interval: HolidayInterval = serde_json::from_str(json).unwrap();
        assert_eq!(interval, HolidayInterval::single_day(make_date("2025-09-10")));
    }

    #[test]
    fn test_serialize_skips_missing_name() {
        let unnamed = HolidayInterval::single_day(make_date("2025-09-10"));
        let json = serde_json::to_string(&unnamed).unwrap();
        assert!(!json.contains("name"));

        let named = unnamed.named("Teachers' Day");
        let json = serde_json::to_string(&named).unwrap();
        assert!(json.contains("\"name\":\"Teachers' Day\""));
    }
}
