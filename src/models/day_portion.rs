//! Day portion model.
//!
//! A leave request states which part of each boundary day it covers. This
//! module defines [`DayPortion`] and its mapping to leave credit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which part of a boundary day a leave request covers.
///
/// Parsing is total: any text other than `"full"`, `"morning"` or
/// `"afternoon"`, and an absent value, becomes [`DayPortion::Unspecified`],
/// which carries no credit.
///
/// # Example
///
/// ```
/// use leave_engine::models::DayPortion;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DayPortion::Full.credit(), Decimal::ONE);
/// assert_eq!(DayPortion::Morning.credit(), Decimal::new(5, 1));
/// assert_eq!(DayPortion::parse("evening"), DayPortion::Unspecified);
/// assert_eq!(DayPortion::Unspecified.credit(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum DayPortion {
    /// The whole day.
    Full,
    /// The morning half of the day.
    Morning,
    /// The afternoon half of the day.
    Afternoon,
    /// Absent or unrecognized portion.
    #[default]
    Unspecified,
}

const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

impl DayPortion {
    /// Parses a portion from its wire name. Never fails.
    pub fn parse(value: &str) -> Self {
        match value {
            "full" => DayPortion::Full,
            "morning" => DayPortion::Morning,
            "afternoon" => DayPortion::Afternoon,
            _ => DayPortion::Unspecified,
        }
    }

    /// Returns the leave credit this portion is worth on a working day.
    pub fn credit(self) -> Decimal {
        match self {
            DayPortion::Full => Decimal::ONE,
            DayPortion::Morning | DayPortion::Afternoon => HALF_DAY,
            DayPortion::Unspecified => Decimal::ZERO,
        }
    }

    /// Returns true for the two half-day portions.
    pub fn is_half_day(self) -> bool {
        matches!(self, DayPortion::Morning | DayPortion::Afternoon)
    }
}

impl From<&str> for DayPortion {
    fn from(value: &str) -> Self {
        DayPortion::parse(value)
    }
}

impl From<Option<String>> for DayPortion {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(DayPortion::parse)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for DayPortion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayPortion::Full => write!(f, "full"),
            DayPortion::Morning => write!(f, "morning"),
            DayPortion::Afternoon => write!(f, "afternoon"),
            DayPortion::Unspecified => write!(f, "unspecified"),
        }
    }
}
