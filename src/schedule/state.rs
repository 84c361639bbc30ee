//! Running accumulator state carried through the month loop

use super::{MAX_ANNUAL_DEPOSIT, MAX_MONTHLY_DEPOSIT};

/// Running trackers for the schedule simulation
///
/// One instance is threaded through the month loop; the engine emits a ledger
/// entry from it after each step. Financial-year trackers reset at FY close,
/// cumulative totals never do.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Account balance (deposits plus credited interest)
    pub balance: f64,
    /// Monthly contribution currently in effect
    pub installment: f64,
    /// Deposits credited since the last FY close
    pub fy_deposit: f64,
    /// Interest accrued since the last FY close, not yet credited
    pub fy_interest: f64,
    /// Total deposits credited since month 1
    pub cumulative_deposit: f64,
    /// Total interest accrued since month 1
    pub cumulative_interest: f64,
}

impl ScheduleState {
    /// Opening state for a plan
    ///
    /// Sub-unit amounts are raised to the floor of 1 (defensive clamping, not
    /// validation), and amounts above the monthly ceiling are clamped to it.
    pub fn opening(start_amount: f64) -> Self {
        Self {
            balance: 0.0,
            installment: start_amount.max(1.0).min(MAX_MONTHLY_DEPOSIT),
            fy_deposit: 0.0,
            fy_interest: 0.0,
            cumulative_deposit: 0.0,
            cumulative_interest: 0.0,
        }
    }

    /// Apply a step-up to the installment, clamped to the monthly ceiling
    pub fn apply_step_up(&mut self, step_up_percent: f64) {
        self.installment =
            (self.installment * (1.0 + step_up_percent / 100.0)).min(MAX_MONTHLY_DEPOSIT);
    }

    /// Deposit for this month after the financial-year cap
    ///
    /// Clamped to the remaining FY headroom, down to 0; the shortfall is not
    /// carried forward.
    pub fn capped_deposit(&self) -> f64 {
        if self.fy_deposit + self.installment > MAX_ANNUAL_DEPOSIT {
            (MAX_ANNUAL_DEPOSIT - self.fy_deposit).max(0.0)
        } else {
            self.installment
        }
    }

    /// Credit a deposit to the balance and the FY/cumulative trackers
    pub fn credit_deposit(&mut self, deposit: f64) {
        self.balance += deposit;
        self.fy_deposit += deposit;
        self.cumulative_deposit += deposit;
    }

    /// Accrue one month of interest without crediting it to the balance
    pub fn accrue_interest(&mut self, interest: f64) {
        self.fy_interest += interest;
        self.cumulative_interest += interest;
    }

    /// Close the financial year: credit accrued interest in one lump step
    /// and reset the FY trackers
    pub fn close_financial_year(&mut self) {
        self.balance += self.fy_interest;
        self.fy_interest = 0.0;
        self.fy_deposit = 0.0;
    }

    /// True when the installment is at or within 1 unit of the monthly ceiling
    pub fn is_capped(&self) -> bool {
        self.installment >= MAX_MONTHLY_DEPOSIT - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_clamps_floor_and_ceiling() {
        assert_eq!(ScheduleState::opening(0.5).installment, 1.0);
        assert_eq!(ScheduleState::opening(-100.0).installment, 1.0);
        assert_eq!(ScheduleState::opening(13_000.0).installment, 12_500.0);
        assert_eq!(ScheduleState::opening(1000.0).installment, 1000.0);
    }

    #[test]
    fn test_step_up_clamps_to_monthly_ceiling() {
        let mut state = ScheduleState::opening(12_000.0);
        state.apply_step_up(10.0);
        // 13200 clamps to the ceiling
        assert_eq!(state.installment, MAX_MONTHLY_DEPOSIT);

        let mut state = ScheduleState::opening(1000.0);
        state.apply_step_up(10.0);
        assert_eq!(state.installment, 1100.0);
    }

    #[test]
    fn test_capped_deposit_headroom() {
        let mut state = ScheduleState::opening(12_500.0);

        // Plenty of headroom: full installment
        assert_eq!(state.capped_deposit(), 12_500.0);

        // Partial headroom: deposit is clamped, shortfall discarded
        state.fy_deposit = 145_000.0;
        assert_eq!(state.capped_deposit(), 5_000.0);

        // No headroom at all
        state.fy_deposit = 150_000.0;
        assert_eq!(state.capped_deposit(), 0.0);
    }

    #[test]
    fn test_close_financial_year_credits_lump() {
        let mut state = ScheduleState::opening(1000.0);
        state.credit_deposit(1000.0);
        state.accrue_interest(50.0);
        state.accrue_interest(25.0);

        assert_eq!(state.balance, 1000.0);
        state.close_financial_year();
        assert_eq!(state.balance, 1075.0);
        assert_eq!(state.fy_interest, 0.0);
        assert_eq!(state.fy_deposit, 0.0);
        // Cumulative tracker is untouched by the credit
        assert_eq!(state.cumulative_interest, 75.0);
    }

    #[test]
    fn test_is_capped_tolerance() {
        let mut state = ScheduleState::opening(12_499.5);
        assert!(state.is_capped());
        state.installment = 12_498.0;
        assert!(!state.is_capped());
    }
}
