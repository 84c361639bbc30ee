//! Headline totals for a projected plan

use serde::Serialize;

use crate::schedule::MonthLedgerEntry;

/// Headline summary of a full schedule
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSummary {
    /// Total deposits credited over the plan, rounded
    pub total_invested: f64,
    /// Maturity minus invested; excludes interest accrued but not yet
    /// credited in a trailing partial financial year
    pub total_interest: f64,
    /// Closing balance of the final month, rounded
    pub maturity: f64,
}

impl PlanSummary {
    /// Derive the summary from a month ledger; an empty ledger yields zeros
    pub fn from_ledger(ledger: &[MonthLedgerEntry]) -> Self {
        let Some(last) = ledger.last() else {
            return Self::default();
        };
        let total_invested = last.cumulative_deposit.round();
        let maturity = last.balance.round();
        Self {
            total_invested,
            total_interest: maturity - total_invested,
            maturity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanParameters;
    use crate::schedule::simulate;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_from_single_fy() {
        let params = PlanParameters {
            start_amount: 2000.0,
            start_month: 4,
            start_year: 2024,
            duration_years: 1,
            step_up_percent: 0.0,
            ..Default::default()
        };
        let ledger = simulate(&params);
        let summary = PlanSummary::from_ledger(&ledger);

        assert_eq!(summary.total_invested, 24_000.0);
        // One FY of accrual on balances 2000..24000 at 7.1%/12: 923
        assert_relative_eq!(summary.total_interest, 923.0, epsilon = 1.0);
        assert_eq!(
            summary.maturity,
            summary.total_invested + summary.total_interest
        );
    }

    #[test]
    fn test_empty_ledger_summary_is_zero() {
        let summary = PlanSummary::from_ledger(&[]);
        assert_eq!(summary.total_invested, 0.0);
        assert_eq!(summary.total_interest, 0.0);
        assert_eq!(summary.maturity, 0.0);
    }
}
