//! Month-by-month projection of a contribution plan

use log::debug;

use super::{MonthLedgerEntry, ScheduleState, ANNUAL_RATE_PERCENT, FY_CLOSING_MONTH};
use crate::plan::PlanParameters;

/// Resolve the calendar (month, year) a given number of months after the
/// plan start, using 1-based month arithmetic with year rollover
pub fn calendar_at(start_month: u32, start_year: i32, months_after: u32) -> (u32, i32) {
    let month0 = start_month - 1 + months_after;
    (month0 % 12 + 1, start_year + (month0 / 12) as i32)
}

/// Projection engine for a single contribution plan
///
/// Pure function of its parameters: no I/O, no shared state, deterministic
/// output. Expects validated parameters (see [`PlanParameters::validate`]);
/// in particular the step-up frequency is used as a modulus divisor.
pub struct ScheduleEngine {
    params: PlanParameters,
}

impl ScheduleEngine {
    pub fn new(params: PlanParameters) -> Self {
        Self { params }
    }

    /// Produce the full month ledger for the plan
    ///
    /// Length is exactly `duration_years * 12`; a zero duration yields an
    /// empty ledger rather than an error.
    pub fn project(&self) -> Vec<MonthLedgerEntry> {
        let p = &self.params;
        let total_months = p.total_months();
        let mut ledger = Vec::with_capacity(total_months as usize);

        let mut state = ScheduleState::opening(p.start_amount);

        for m in 0..total_months {
            let (calendar_month, calendar_year) = calendar_at(p.start_month, p.start_year, m);

            // Step-up never fires on month 0
            if p.step_up_percent > 0.0 && m > 0 && m % p.step_up_frequency_months == 0 {
                state.apply_step_up(p.step_up_percent);
            }

            let deposit = state.capped_deposit();
            state.credit_deposit(deposit);

            // Monthly compounding basis for computation; crediting waits for
            // the FY close
            let monthly_interest = state.balance * ANNUAL_RATE_PERCENT / 100.0 / 12.0;
            state.accrue_interest(monthly_interest);

            if calendar_month == FY_CLOSING_MONTH {
                state.close_financial_year();
            }

            ledger.push(MonthLedgerEntry {
                absolute_month: m + 1,
                calendar_month,
                calendar_year,
                monthly_installment: state.installment,
                deposit,
                monthly_interest,
                balance: state.balance,
                cumulative_deposit: state.cumulative_deposit,
                cumulative_interest: state.cumulative_interest,
                is_capped: state.is_capped(),
            });
        }

        debug!(
            "generated {} ledger rows for {}-year plan starting {}/{}",
            ledger.len(),
            p.duration_years,
            p.start_month,
            p.start_year
        );
        ledger
    }
}

/// Simulate a plan into its month ledger
pub fn simulate(params: &PlanParameters) -> Vec<MonthLedgerEntry> {
    ScheduleEngine::new(params.clone()).project()
}
