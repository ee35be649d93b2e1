//! Calculation logic for the Leave Engine.
//!
//! This module contains the calculation functions for charging leave:
//! weekend and holiday classification, holiday set construction, chargeable
//! leave day counting with half-day boundaries, approval chain selection, and
//! advisory limit checks.

mod approval_chain;
mod calendar;
mod holiday_set;
mod leave_days;
mod leave_limits;

pub use approval_chain::{ApprovalChainSelection, select_approval_chain};
pub use calendar::{classify_day, is_weekend};
pub use holiday_set::{HolidaySet, build_holiday_set};
pub use leave_days::{
    LeaveDaysBreakdown, calculate_leave_breakdown, calculate_leave_days, leave_days_between,
};
pub use leave_limits::{
    EXCEEDS_REQUEST_LIMIT, INSUFFICIENT_BALANCE, NO_CHARGEABLE_DAYS, check_balance,
    check_chargeable, check_request_limit,
};
