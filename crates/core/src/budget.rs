//! Daily budget evaluation.
//!
//! When an expense is created or edited, the handler sums the rest of that
//! day's spending, looks up the limit covering the purchase date (at most
//! one exists -- see [`crate::limits`]), and asks this module whether the
//! candidate amount pushes the day over. The result is advisory: the write
//! always proceeds; the caller decides how loudly to warn.

use serde::Serialize;

use crate::types::Cents;

/// Result of evaluating a candidate expense against the day's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// False only when a limit covers the date and `total_after` exceeds it.
    pub within_limit: bool,
    /// Day total including the candidate amount.
    pub total_after: Cents,
    /// The covering limit's daily allowance, if any limit covers the date.
    pub limit: Option<Cents>,
}

/// Pure evaluation step: `day_total` is the sum of the day's other expenses
/// (the edited expense already excluded), `daily_limit` the covering
/// limit's allowance if one exists.
pub fn evaluate(day_total: Cents, candidate_amount: Cents, daily_limit: Option<Cents>) -> BudgetReport {
    let total_after = day_total + candidate_amount;
    let within_limit = match daily_limit {
        Some(limit) => total_after <= limit,
        None => true,
    };
    BudgetReport {
        within_limit,
        total_after,
        limit: daily_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_limit() {
        // 80 spent, limit 100: adding 15 lands at 95, still within.
        let report = evaluate(80, 15, Some(100));
        assert_eq!(
            report,
            BudgetReport {
                within_limit: true,
                total_after: 95,
                limit: Some(100),
            }
        );
    }

    #[test]
    fn test_over_limit() {
        // 80 spent, limit 100: adding 25 lands at 105, over.
        let report = evaluate(80, 25, Some(100));
        assert_eq!(
            report,
            BudgetReport {
                within_limit: false,
                total_after: 105,
                limit: Some(100),
            }
        );
    }

    #[test]
    fn test_exactly_at_limit_is_within() {
        let report = evaluate(80, 20, Some(100));
        assert!(report.within_limit);
        assert_eq!(report.total_after, 100);
    }

    #[test]
    fn test_no_covering_limit_is_always_within() {
        let report = evaluate(1_000_000, 1_000_000, None);
        assert!(report.within_limit);
        assert_eq!(report.total_after, 2_000_000);
        assert_eq!(report.limit, None);
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        // Amounts may be any integer; a refund entered as a negative
        // expense simply lowers the day total.
        let report = evaluate(120, -30, Some(100));
        assert!(report.within_limit);
        assert_eq!(report.total_after, 90);
    }
}
