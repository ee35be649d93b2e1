//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, DayPortion, HolidayInterval};

/// The longest span, in calendar days, a request range or one of its holiday
/// intervals may cover.
pub const MAX_SPAN_DAYS: i64 = 366;

/// The most holiday intervals a request may carry.
pub const MAX_REQUEST_HOLIDAYS: usize = 100;

/// Request body for the `/calculate` endpoint.
///
/// Only the two dates are required. Absent portions charge nothing on their
/// boundary day, matching how unrecognized portions are treated. When
/// `holidays` is absent the configured holiday calendars are used; an empty
/// list means weekends are the only non-working days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave.
    pub end_date: NaiveDate,
    /// The portion of the first day requested.
    #[serde(default)]
    pub start_portion: DayPortion,
    /// The portion of the last day requested.
    #[serde(default)]
    pub end_portion: DayPortion,
    /// The leave type code; selects the approval chain when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    /// Holiday intervals overriding the configured calendars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayInterval>>,
    /// The requester's remaining balance for the leave type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_balance: Option<Decimal>,
}

impl CalculationRequest {
    /// Returns the validated date range of the request.
    pub fn date_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Checks the fields that serde cannot.
    ///
    /// Every day of the range and of each holiday interval is visited during
    /// a calculation, so both are capped at [`MAX_SPAN_DAYS`]. An inverted
    /// range passes here and is rejected by [`Self::date_range`].
    pub fn validate(&self) -> EngineResult<()> {
        let span = calendar_span(self.start_date, self.end_date);
        if span > MAX_SPAN_DAYS {
            return Err(EngineError::InvalidRequest {
                field: "end_date".to_string(),
                message: format!(
                    "range covers {} days; at most {} are allowed",
                    span, MAX_SPAN_DAYS
                ),
            });
        }
        if let Some(holidays) = &self.holidays {
            if holidays.len() > MAX_REQUEST_HOLIDAYS {
                return Err(EngineError::InvalidRequest {
                    field: "holidays".to_string(),
                    message: format!(
                        "{} intervals given; at most {} are allowed",
                        holidays.len(),
                        MAX_REQUEST_HOLIDAYS
                    ),
                });
            }
            if let Some(holiday) = holidays
                .iter()
                .find(|h| calendar_span(h.start, h.end) > MAX_SPAN_DAYS)
            {
                return Err(EngineError::InvalidRequest {
                    field: "holidays".to_string(),
                    message: format!(
                        "interval {}..={} covers more than {} days",
                        holiday.start, holiday.end, MAX_SPAN_DAYS
                    ),
                });
            }
        }
        if let Some(balance) = self.remaining_balance {
            if balance < Decimal::ZERO {
                return Err(EngineError::InvalidRequest {
                    field: "remaining_balance".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        if let Some(code) = &self.leave_type {
            if code.trim().is_empty() {
                return Err(EngineError::InvalidRequest {
                    field: "leave_type".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Calendar days from `start` to `end`, both included; zero or less when
/// inverted.
fn calendar_span(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}
