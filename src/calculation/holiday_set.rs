//! Holiday set construction.
//!
//! Holiday calendars arrive as inclusive intervals. Before a calculation they
//! are expanded into a [`HolidaySet`] of individual dates so that each day of
//! a leave request can be classified with a single lookup.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::HolidayInterval;

use super::calendar::is_weekend;

/// The set of individual dates covered by a collection of holiday intervals.
///
/// Built fresh for each calculation; overlapping intervals are merged by
/// set union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Checks if a date is covered by any holiday interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Checks if a date is a weekend day or a holiday.
    pub fn is_non_working(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.contains(date)
    }

    /// Returns the number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the holiday dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Expands holiday intervals into the set of dates they cover.
///
/// Every date from `start` to `end` of each interval is included, weekends
/// inside the interval as well. Interval order does not affect the result,
/// and an interval whose `start` is after its `end` contributes nothing.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::build_holiday_set;
/// use leave_engine::models::HolidayInterval;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
/// let holidays = build_holiday_set(&[
///     HolidayInterval::new(date(1), date(3)),
///     HolidayInterval::new(date(3), date(5)), // overlaps on the 3rd
/// ]);
///
/// assert_eq!(holidays.len(), 5);
/// assert!(holidays.contains(date(4)));
/// assert!(!holidays.contains(date(6)));
/// ```
pub fn build_holiday_set(intervals: &[HolidayInterval]) -> HolidaySet {
    intervals.iter().flat_map(HolidayInterval::dates).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn interval(start: &str, end: &str) -> HolidayInterval {
        HolidayInterval::new(make_date(start), make_date(end))
    }

    #[test]
    fn test_empty_intervals_build_empty_set() {
        let set = build_holiday_set(&[]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_single_day_interval() {
        let set = build_holiday_set(&[interval("2025-09-10", "2025-09-10")]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(make_date("2025-09-10")));
    }

    #[test]
    fn test_interval_includes_both_endpoints() {
        let set = build_holiday_set(&[interval("2025-10-01", "2025-10-08")]);
        assert_eq!(set.len(), 8);
        assert!(set.contains(make_date("2025-10-01")));
        assert!(set.contains(make_date("2025-10-08")));
        assert!(!set.contains(make_date("2025-09-30")));
        assert!(!set.contains(make_date("2025-10-09")));
    }

    #[test]
    fn test_interval_includes_weekends_inside_it() {
        // 2025-10-04 and 2025-10-05 are Saturday and Sunday
        let set = build_holiday_set(&[interval("2025-10-03", "2025-10-06")]);
        assert!(set.contains(make_date("2025-10-04")));
        assert!(set.contains(make_date("2025-10-05")));
    }

    #[test]
    fn test_overlapping_intervals_are_idempotent() {
        let set = build_holiday_set(&[
            interval("2025-10-01", "2025-10-05"),
            interval("2025-10-03", "2025-10-08"),
            interval("2025-10-01", "2025-10-05"),
        ]);
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_interval_order_does_not_matter() {
        let forward = build_holiday_set(&[
            interval("2025-10-01", "2025-10-08"),
            interval("2026-01-01", "2026-01-03"),
        ]);
        let backward = build_holiday_set(&[
            interval("2026-01-01", "2026-01-03"),
            interval("2025-10-01", "2025-10-08"),
        ]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_inverted_interval_contributes_nothing() {
        let set = build_holiday_set(&[
            interval("2025-10-08", "2025-10-01"),
            interval("2026-01-01", "2026-01-01"),
        ]);
        assert_eq!(set.len(), 1);
        assert!(!set.contains(make_date("2025-10-04")));
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = build_holiday_set(&[
            interval("2026-01-01", "2026-01-02"),
            interval("2025-10-01", "2025-10-01"),
        ]);
        let dates: Vec<NaiveDate> = set.iter().collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-10-01"),
                make_date("2026-01-01"),
                make_date("2026-01-02")
            ]
        );
    }

    #[test]
    fn test_is_non_working_combines_weekends_and_holidays() {
        let set = build_holiday_set(&[interval("2025-09-10", "2025-09-10")]);
        assert!(set.is_non_working(make_date("2025-09-10"))); // Wednesday holiday
        assert!(set.is_non_working(make_date("2025-09-13"))); // Saturday
        assert!(set.is_non_working(make_date("2025-09-14"))); // Sunday
        assert!(!set.is_non_working(make_date("2025-09-11"))); // Thursday
    }
}
