//! Approval chain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single approver in an approval chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Approver {
    /// The role identifier (e.g., "department_head").
    pub role: String,
    /// The human-readable title of the role.
    pub title: String,
}

/// The ordered list of approvers selected for a leave request.
///
/// # Example
///
/// ```
/// use leave_engine::models::{ApprovalChain, Approver};
/// use rust_decimal::Decimal;
///
/// let chain = ApprovalChain {
///     leave_type: "annual".to_string(),
///     max_days: Some(Decimal::new(3, 0)),
///     approvers: vec![Approver {
///         role: "department_head".to_string(),
///         title: "Head of Department".to_string(),
///     }],
/// };
/// assert_eq!(chain.roles(), vec!["department_head"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalChain {
    /// The leave type the chain was selected for.
    pub leave_type: String,
    /// The day-count ceiling of the rule that matched; `None` for the
    /// uncapped rule.
    pub max_days: Option<Decimal>,
    /// Approvers in the order they must sign off.
    pub approvers: Vec<Approver>,
}

impl ApprovalChain {
    /// Returns the approver roles in order.
    pub fn roles(&self) -> Vec<&str> {
        self.approvers.iter().map(|a| a.role.as_str()).collect()
    }
}
