//! Calculation result models for the Leave Engine.
//!
//! This module contains the [`LeaveCalculationResult`] type and the audit
//! structures that capture every decision made while charging a leave request.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApprovalChain, DayCredit, DayPortion};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention from an approver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use leave_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of charging a leave request.
///
/// # Example
///
/// ```
/// use leave_engine::models::{AuditTrace, DayPortion, LeaveCalculationResult};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = LeaveCalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
///     start_portion: DayPortion::Full,
///     end_portion: DayPortion::Full,
///     leave_type: None,
///     total_days: Decimal::ONE,
///     days: vec![],
///     approval_chain: None,
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The first day of the request.
    pub start_date: NaiveDate,
    /// The last day of the request.
    pub end_date: NaiveDate,
    /// The portion requested on the first day.
    pub start_portion: DayPortion,
    /// The portion requested on the last day.
    pub end_portion: DayPortion,
    /// The leave type code, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    /// The total chargeable leave days.
    pub total_days: Decimal,
    /// Per-day breakdown of the charge.
    pub days: Vec<DayCredit>,
    /// The approval chain, when a leave type was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_chain: Option<ApprovalChain>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
