//! Advisory checks on a calculated leave request.
//!
//! None of these checks block a request. Each produces an [`AuditWarning`]
//! for the approvers when a limit is crossed.

use rust_decimal::Decimal;

use crate::config::LeaveType;
use crate::models::AuditWarning;

/// Warning code for requests longer than the leave type allows at once.
pub const EXCEEDS_REQUEST_LIMIT: &str = "EXCEEDS_REQUEST_LIMIT";

/// Warning code for requests larger than the remaining balance.
pub const INSUFFICIENT_BALANCE: &str = "INSUFFICIENT_BALANCE";

/// Warning code for requests that charge no days at all.
pub const NO_CHARGEABLE_DAYS: &str = "NO_CHARGEABLE_DAYS";

/// Warns when `days` exceeds the leave type's per-request limit.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::check_request_limit;
/// use leave_engine::config::LeaveType;
/// use rust_decimal::Decimal;
///
/// let bereavement: LeaveType = serde_yaml::from_str(
///     "{code: bereavement, name: Bereavement Leave, max_days_per_request: 3, approval_rules: []}",
/// ).unwrap();
///
/// assert!(check_request_limit(&bereavement, Decimal::new(3, 0)).is_none());
/// assert!(check_request_limit(&bereavement, Decimal::new(35, 1)).is_some());
/// ```
pub fn check_request_limit(leave_type: &LeaveType, days: Decimal) -> Option<AuditWarning> {
    let limit = leave_type.max_days_per_request?;
    (days > limit).then(|| {
        AuditWarning::new(
            EXCEEDS_REQUEST_LIMIT,
            format!(
                "{} days exceeds the {} day limit per request for {}",
                days.normalize(),
                limit.normalize(),
                leave_type.name
            ),
            "medium",
        )
    })
}

/// Warns when `days` exceeds the remaining leave balance.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::check_balance;
/// use rust_decimal::Decimal;
///
/// assert!(check_balance(Decimal::new(25, 1), Decimal::new(5, 0)).is_none());
///
/// let warning = check_balance(Decimal::new(6, 0), Decimal::new(55, 1)).unwrap();
/// assert_eq!(warning.code, "INSUFFICIENT_BALANCE");
/// ```
pub fn check_balance(days: Decimal, remaining: Decimal) -> Option<AuditWarning> {
    (days > remaining).then(|| {
        AuditWarning::new(
            INSUFFICIENT_BALANCE,
            format!(
                "{} days requested but only {} days remain",
                days.normalize(),
                remaining.normalize()
            ),
            "high",
        )
    })
}

/// Warns when a request charges nothing, e.g. it only covers weekends or
/// holidays.
pub fn check_chargeable(days: Decimal) -> Option<AuditWarning> {
    days.is_zero().then(|| {
        AuditWarning::new(
            NO_CHARGEABLE_DAYS,
            "The requested dates contain no working days to charge",
            "low",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn leave_type(max_days_per_request: Option<&str>) -> LeaveType {
        LeaveType {
            code: "personal".to_string(),
            name: "Personal Leave".to_string(),
            description: String::new(),
            paid: false,
            max_days_per_request: max_days_per_request.map(dec),
            approval_rules: vec![],
        }
    }

    #[test]
    fn test_request_within_limit_has_no_warning() {
        assert!(check_request_limit(&leave_type(Some("5")), dec("5")).is_none());
        assert!(check_request_limit(&leave_type(Some("5")), dec("0.5")).is_none());
    }

    #[test]
    fn test_request_over_limit_warns() {
        let warning = check_request_limit(&leave_type(Some("5")), dec("5.5")).unwrap();
        assert_eq!(warning.code, EXCEEDS_REQUEST_LIMIT);
        assert_eq!(warning.severity, "medium");
        assert_eq!(
            warning.message,
            "5.5 days exceeds the 5 day limit per request for Personal Leave"
        );
    }

    #[test]
    fn test_unlimited_leave_type_never_warns() {
        assert!(check_request_limit(&leave_type(None), dec("365")).is_none());
    }

    #[test]
    fn test_balance_exactly_used_has_no_warning() {
        assert!(check_balance(dec("4.5"), dec("4.5")).is_none());
    }

    #[test]
    fn test_balance_exceeded_warns() {
        let warning = check_balance(dec("5"), dec("4.5")).unwrap();
        assert_eq!(warning.code, INSUFFICIENT_BALANCE);
        assert_eq!(warning.severity, "high");
        assert_eq!(warning.message, "5 days requested but only 4.5 days remain");
    }

    #[test]
    fn test_zero_days_warns() {
        let warning = check_chargeable(Decimal::ZERO).unwrap();
        assert_eq!(warning.code, NO_CHARGEABLE_DAYS);
        assert!(check_chargeable(dec("0.5")).is_none());
    }
}
