//! Per-day leave credit records.
//!
//! A leave calculation can report how each calendar day of the requested
//! range was classified and how much credit it was charged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayPortion;

/// How a calendar day is classified for leave purposes.
///
/// # Example
///
/// ```
/// use leave_engine::models::DayKind;
///
/// assert!(DayKind::Working.is_working());
/// assert!(!DayKind::Holiday.is_working());
/// assert_eq!(DayKind::Weekend.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not covered by a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A day covered by a holiday interval.
    Holiday,
}

impl DayKind {
    /// Returns true for days that can be charged as leave.
    pub fn is_working(self) -> bool {
        self == DayKind::Working
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// The leave credit charged for one calendar day of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCredit {
    /// The calendar day.
    pub date: NaiveDate,
    /// How the day was classified.
    pub kind: DayKind,
    /// The requested portion, present only for the first and last day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<DayPortion>,
    /// The credit charged for the day (0, 0.5 or 1).
    pub credit: Decimal,
}
