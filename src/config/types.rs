//! Configuration types for leave calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Approver, HolidayInterval};

/// Metadata about the institution the configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionMetadata {
    /// A short identifying code (e.g., "UNIV").
    pub code: String,
    /// The human-readable name of the institution.
    pub name: String,
    /// The version of the leave policy.
    pub version: String,
}

/// One approval rule of a leave type.
///
/// A rule applies to requests of at most `max_days` chargeable days. A rule
/// without `max_days` applies to any length and is considered last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRule {
    /// The largest day count this rule covers, inclusive.
    #[serde(default)]
    pub max_days: Option<Decimal>,
    /// Approvers in sign-off order.
    pub approvers: Vec<Approver>,
}

/// A configured kind of leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// The leave type code (e.g., "annual").
    pub code: String,
    /// The human-readable name of the leave type.
    pub name: String,
    /// A description of the leave type.
    #[serde(default)]
    pub description: String,
    /// Whether the leave is paid.
    #[serde(default = "default_paid")]
    pub paid: bool,
    /// The longest single request allowed without a warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days_per_request: Option<Decimal>,
    /// Approval rules selected by chargeable day count.
    pub approval_rules: Vec<ApprovalRule>,
}

fn default_paid() -> bool {
    true
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// All configured leave types.
    pub leave_types: Vec<LeaveType>,
}

/// A named holiday calendar, typically one academic year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The calendar name (e.g., "2025-2026 academic year").
    pub name: String,
    /// The non-working intervals of the calendar.
    pub holidays: Vec<HolidayInterval>,
}

/// The complete leave configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    /// Institution metadata.
    institution: InstitutionMetadata,
    /// Leave types by code.
    leave_types: HashMap<String, LeaveType>,
    /// Holiday calendars, sorted by name.
    calendars: Vec<HolidayCalendar>,
}

impl LeaveConfig {
    /// Creates a new LeaveConfig from its component parts.
    pub fn new(
        institution: InstitutionMetadata,
        leave_types: HashMap<String, LeaveType>,
        calendars: Vec<HolidayCalendar>,
    ) -> Self {
        let mut sorted_calendars = calendars;
        sorted_calendars.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            institution,
            leave_types,
            calendars: sorted_calendars,
        }
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        &self.institution
    }

    /// Returns all leave types by code.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns all holiday calendars.
    pub fn calendars(&self) -> &[HolidayCalendar] {
        &self.calendars
    }
}
