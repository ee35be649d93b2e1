//! Core data models for the Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod approval;
mod calculation_result;
mod date_range;
mod day_credit;
mod day_portion;
mod holiday;

pub use approval::{ApprovalChain, Approver};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, LeaveCalculationResult};
pub use date_range::{DateRange, DaySequence};
pub use day_credit::{DayCredit, DayKind};
pub use day_portion::DayPortion;
pub use holiday::HolidayInterval;
