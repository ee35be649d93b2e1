//! Day classification for leave calculations.
//!
//! This module decides whether a calendar day is a working day, a weekend
//! day or a holiday.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DayKind;

use super::HolidaySet;

/// Returns true for Saturday and Sunday.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2025-09-13 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 9, 13).unwrap()));
/// // 2025-09-10 is a Wednesday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 9, 10).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies a day against the weekend rule and a holiday set.
///
/// A weekend day inside a holiday interval is reported as
/// [`DayKind::Holiday`]; either way it is non-working.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{build_holiday_set, classify_day};
/// use leave_engine::models::{DayKind, HolidayInterval};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap();
/// let holidays = build_holiday_set(&[HolidayInterval::single_day(date(10))]);
///
/// assert_eq!(classify_day(date(10), &holidays), DayKind::Holiday);
/// assert_eq!(classify_day(date(11), &holidays), DayKind::Working);
/// assert_eq!(classify_day(date(13), &holidays), DayKind::Weekend);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &HolidaySet) -> DayKind {
    if holidays.contains(date) {
        DayKind::Holiday
    } else if is_weekend(date) {
        DayKind::Weekend
    } else {
        DayKind::Working
    }
}
