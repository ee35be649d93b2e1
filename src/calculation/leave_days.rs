//! Chargeable leave day calculation.
//!
//! This module counts the leave days a request debits from a balance. Weekend
//! days and holidays are never charged. The first and last day of the
//! request are charged according to the requested [`DayPortion`], so a
//! request may start or end with half a day; every working day in between
//! counts as one full day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, DateRange, DayCredit, DayKind, DayPortion, HolidayInterval};

use super::{HolidaySet, build_holiday_set, classify_day};

/// The per-day charge for a leave request, with its total and audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDaysBreakdown {
    /// The total chargeable leave days.
    pub total_days: Decimal,
    /// One record per calendar day of the range, in order.
    pub days: Vec<DayCredit>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the chargeable leave days for a date range.
///
/// # Arguments
///
/// * `range` - The requested days, both ends included
/// * `start_portion` - The portion of the first day requested
/// * `end_portion` - The portion of the last day requested; ignored when the
///   range is a single day
/// * `holidays` - Holiday intervals; may be empty
///
/// # Behavior
///
/// - A single-day range is charged `start_portion.credit()` when the day is a
///   working day and `0` otherwise
/// - In a multi-day range each working day strictly between the ends counts
///   `1`, and each end counts its portion's credit only if it is a working day
/// - Weekend days (Saturday, Sunday) and days covered by a holiday interval
///   are never charged, whatever portion was requested
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_leave_days;
/// use leave_engine::models::{DateRange, DayPortion};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Wednesday morning through Friday
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
/// )
/// .unwrap();
///
/// let days = calculate_leave_days(&range, DayPortion::Morning, DayPortion::Full, &[]);
/// assert_eq!(days, Decimal::new(25, 1)); // 2.5 days
/// ```
pub fn calculate_leave_days(
    range: &DateRange,
    start_portion: DayPortion,
    end_portion: DayPortion,
    holidays: &[HolidayInterval],
) -> Decimal {
    let holiday_set = build_holiday_set(holidays);
    let total_days = charge(range, start_portion, end_portion, &holiday_set);

    debug!(
        range = %range,
        start_portion = %start_portion,
        end_portion = %end_portion,
        holiday_dates = holiday_set.len(),
        total_days = %total_days,
        "Calculated leave days"
    );

    total_days
}

/// Calculates chargeable leave days from unchecked dates.
///
/// Fails with [`EngineError::InvalidRange`](crate::error::EngineError::InvalidRange)
/// when `start` is after `end`; otherwise behaves as [`calculate_leave_days`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::leave_days_between;
/// use leave_engine::models::DayPortion;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
///
/// let days = leave_days_between(friday, monday, DayPortion::Full, DayPortion::Full, &[])?;
/// assert_eq!(days.to_string(), "2");
///
/// assert!(leave_days_between(monday, friday, DayPortion::Full, DayPortion::Full, &[]).is_err());
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
pub fn leave_days_between(
    start: NaiveDate,
    end: NaiveDate,
    start_portion: DayPortion,
    end_portion: DayPortion,
    holidays: &[HolidayInterval],
) -> EngineResult<Decimal> {
    let range = DateRange::new(start, end)?;
    Ok(calculate_leave_days(
        &range,
        start_portion,
        end_portion,
        holidays,
    ))
}

/// Calculates chargeable leave days together with a per-day breakdown.
///
/// The total always equals what [`calculate_leave_days`] returns for the
/// same inputs. Interior days carry no portion; the first and last day carry
/// the portion that was requested for them.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_leave_breakdown;
/// use leave_engine::models::{DateRange, DayKind, DayPortion};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Friday through Monday
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
/// )
/// .unwrap();
///
/// let breakdown = calculate_leave_breakdown(&range, DayPortion::Full, DayPortion::Afternoon, &[], 1);
/// assert_eq!(breakdown.total_days, Decimal::new(15, 1));
/// assert_eq!(breakdown.days.len(), 4);
/// assert_eq!(breakdown.days[1].kind, DayKind::Weekend);
/// ```
pub fn calculate_leave_breakdown(
    range: &DateRange,
    start_portion: DayPortion,
    end_portion: DayPortion,
    holidays: &[HolidayInterval],
    step_number: u32,
) -> LeaveDaysBreakdown {
    let holiday_set = build_holiday_set(holidays);

    let days: Vec<DayCredit> = range
        .days()
        .map(|date| {
            let kind = classify_day(date, &holiday_set);
            let portion = if date == range.start() {
                Some(start_portion)
            } else if date == range.end() {
                Some(end_portion)
            } else {
                None
            };
            let credit = if kind.is_working() {
                portion.map_or(Decimal::ONE, DayPortion::credit)
            } else {
                Decimal::ZERO
            };
            if let (true, Some(portion)) = (kind.is_working(), portion) {
                log_unspecified_portion(date, portion);
            }
            DayCredit {
                date,
                kind,
                portion,
                credit,
            }
        })
        .collect();

    let total_days: Decimal = days.iter().map(|d| d.credit).sum();
    let count_of = |kind: DayKind| days.iter().filter(|d| d.kind == kind).count();
    let working_days = count_of(DayKind::Working);
    let weekend_days = count_of(DayKind::Weekend);
    let holiday_days = count_of(DayKind::Holiday);

    let reasoning = if range.is_single_day() {
        match days.first().map(|d| d.kind) {
            Some(DayKind::Working) => format!(
                "Single working day charged as {} ({} days)",
                start_portion,
                total_days.normalize()
            ),
            Some(kind) => format!("Single day is a {} day; nothing charged", kind),
            None => "Empty range; nothing charged".to_string(),
        }
    } else {
        format!(
            "{} working days between {} ({}) and {} ({}), {} weekend and {} holiday days excluded: {} days",
            working_days,
            range.start(),
            start_portion,
            range.end(),
            end_portion,
            weekend_days,
            holiday_days,
            total_days.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_days".to_string(),
        rule_name: "Chargeable Leave Days".to_string(),
        input: serde_json::json!({
            "start_date": range.start().to_string(),
            "end_date": range.end().to_string(),
            "start_portion": start_portion.to_string(),
            "end_portion": end_portion.to_string(),
            "holiday_intervals": holidays.len()
        }),
        output: serde_json::json!({
            "working_days": working_days,
            "weekend_days": weekend_days,
            "holiday_days": holiday_days,
            "total_days": total_days.normalize().to_string()
        }),
        reasoning,
    };

    debug!(
        range = %range,
        total_days = %total_days,
        working_days,
        "Calculated leave breakdown"
    );

    LeaveDaysBreakdown {
        total_days,
        days,
        audit_step,
    }
}

/// Credit for a boundary day: its portion on a working day, nothing otherwise.
fn boundary_credit(date: NaiveDate, portion: DayPortion, holidays: &HolidaySet) -> Decimal {
    if holidays.is_non_working(date) {
        return Decimal::ZERO;
    }
    log_unspecified_portion(date, portion);
    portion.credit()
}

fn log_unspecified_portion(date: NaiveDate, portion: DayPortion) {
    if portion == DayPortion::Unspecified {
        debug!(date = %date, "Unspecified portion on a working day; charging nothing");
    }
}

fn charge(
    range: &DateRange,
    start_portion: DayPortion,
    end_portion: DayPortion,
    holidays: &HolidaySet,
) -> Decimal {
    if range.is_single_day() {
        return boundary_credit(range.start(), start_portion, holidays);
    }

    let middle = range
        .interior_days()
        .filter(|date| !holidays.is_non_working(*date))
        .fold(Decimal::ZERO, |acc, _| acc + Decimal::ONE);

    middle
        + boundary_credit(range.start(), start_portion, holidays)
        + boundary_credit(range.end(), end_portion, holidays)
}
