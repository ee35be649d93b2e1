//! Date range model and the day sequence used to walk it.
//!
//! This module defines [`DateRange`], the validated inclusive range of
//! calendar dates a leave request covers, and [`DaySequence`], a lazy,
//! restartable iterator over consecutive calendar dates.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates with `start <= end`.
///
/// The invariant is enforced at construction, both through [`DateRange::new`]
/// and when deserializing.
///
/// # Example
///
/// ```
/// use leave_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.calendar_days(), 3);
/// assert!(!range.is_single_day());
///
/// // An inverted range is rejected
/// assert!(DateRange::new(range.end(), range.start()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: RawDateRange) -> EngineResult<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a new range, failing with [`EngineError::InvalidRange`] when
    /// `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the range starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Returns the number of calendar days in the range, both ends included.
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Checks if a date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns every day of the range, both ends included.
    pub fn days(&self) -> DaySequence {
        DaySequence::new(self.start, self.end)
    }

    /// Returns the days strictly between `start` and `end`.
    ///
    /// Empty for single-day ranges and for ranges of two adjacent days.
    pub fn interior_days(&self) -> DaySequence {
        DaySequence::between(self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A lazy sequence of consecutive calendar dates.
///
/// The sequence is finite and `Clone`, so it can be restarted by cloning it
/// before iteration. A sequence whose first date is after its last date is
/// empty.
///
/// # Example
///
/// ```
/// use leave_engine::models::DaySequence;
/// use chrono::NaiveDate;
///
/// let first = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
/// let last = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
///
/// let days: Vec<_> = DaySequence::new(first, last).collect();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[2], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
///
/// assert_eq!(DaySequence::new(last, first).count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySequence {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl DaySequence {
    /// Creates a sequence from `first` to `last`, both included.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            next: (first <= last).then_some(first),
            last,
        }
    }

    /// Creates a sequence of the days strictly between `start` and `end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        match (start.succ_opt(), end.pred_opt()) {
            (Some(first), Some(last)) => Self::new(first, last),
            _ => Self {
                next: None,
                last: start,
            },
        }
    }
}

impl Iterator for DaySequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) => {
                let remaining = ((self.last - next).num_days() + 1) as usize;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DaySequence {}

impl FusedIterator for DaySequence {}
