//! Approval chain selection.
//!
//! Each leave type lists approval rules keyed by a ceiling on chargeable
//! days. Longer requests need more sign-offs, so the chain is chosen from the
//! smallest ceiling that still covers the request.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{ApprovalRule, LeaveType};
use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalChain, AuditStep};

/// The result of selecting an approval chain, including the audit step.
#[derive(Debug, Clone)]
pub struct ApprovalChainSelection {
    /// The selected chain.
    pub chain: ApprovalChain,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

/// Selects the approval chain of a leave type for a chargeable day count.
///
/// Rules are tried in ascending order of `max_days`, with the uncapped rule
/// (no `max_days`) last. The first rule whose ceiling is at least `days`, or
/// the uncapped rule, is selected.
///
/// # Returns
///
/// Returns the selection, or [`EngineError::ApprovalChainNotFound`] when no
/// rule covers `days`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::select_approval_chain;
/// use leave_engine::config::LeaveType;
/// use rust_decimal::Decimal;
///
/// let leave_type: LeaveType = serde_yaml::from_str(r#"
/// code: annual
/// name: Annual Leave
/// approval_rules:
///   - max_days: 3
///     approvers:
///       - { role: department_head, title: Head of Department }
///   - approvers:
///       - { role: department_head, title: Head of Department }
///       - { role: human_resources, title: Human Resources Office }
/// "#).unwrap();
///
/// let short = select_approval_chain(&leave_type, Decimal::new(25, 1), 1)?;
/// assert_eq!(short.chain.roles(), vec!["department_head"]);
///
/// let long = select_approval_chain(&leave_type, Decimal::new(4, 0), 1)?;
/// assert_eq!(long.chain.roles(), vec!["department_head", "human_resources"]);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
pub fn select_approval_chain(
    leave_type: &LeaveType,
    days: Decimal,
    step_number: u32,
) -> EngineResult<ApprovalChainSelection> {
    let mut rules: Vec<&ApprovalRule> = leave_type.approval_rules.iter().collect();
    rules.sort_by(|a, b| compare_ceilings(a.max_days, b.max_days));

    let rule = rules
        .into_iter()
        .find(|rule| rule.max_days.is_none_or(|max_days| days <= max_days))
        .ok_or_else(|| EngineError::ApprovalChainNotFound {
            leave_type: leave_type.code.clone(),
            days,
        })?;

    let chain = ApprovalChain {
        leave_type: leave_type.code.clone(),
        max_days: rule.max_days,
        approvers: rule.approvers.clone(),
    };

    let reasoning = match rule.max_days {
        Some(max_days) => format!(
            "{} days is within the {} day ceiling for {}; {} approver(s) required",
            days.normalize(),
            max_days.normalize(),
            leave_type.name,
            chain.approvers.len()
        ),
        None => format!(
            "{} days exceeds every capped rule for {}; {} approver(s) required",
            days.normalize(),
            leave_type.name,
            chain.approvers.len()
        ),
    };

    debug!(
        leave_type = %leave_type.code,
        days = %days,
        approvers = chain.approvers.len(),
        "Selected approval chain"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "approval_chain".to_string(),
        rule_name: "Approval Chain Selection".to_string(),
        input: serde_json::json!({
            "leave_type": leave_type.code,
            "days": days.normalize().to_string()
        }),
        output: serde_json::json!({
            "max_days": rule.max_days.map(|d| d.normalize().to_string()),
            "approvers": chain.roles()
        }),
        reasoning,
    };

    Ok(ApprovalChainSelection { chain, audit_step })
}

/// Orders capped rules by ceiling and puts the uncapped rule last.
fn compare_ceilings(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
