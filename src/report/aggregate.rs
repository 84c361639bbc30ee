//! Grouping of month ledgers into period summary rows
//!
//! Period deposit/interest are derived as differences of the cumulative
//! ledger totals at period boundaries, never by re-summing raw months, so
//! rounding applied at emission cannot compound across periods. The
//! preceding cumulative totals are carried forward through the scan rather
//! than looked up back in the ledger.

use chrono::Month;
use serde::Serialize;

use crate::plan::Granularity;
use crate::schedule::{MonthLedgerEntry, FY_CLOSING_MONTH};

/// Partitioning scheme for the month ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingPeriod {
    /// One row per simulated month
    Monthly,
    /// One row per financial year (groups close in March)
    FinancialYear,
    /// One row per contiguous block of N months; N must be >= 1
    EveryMonths(u32),
}

impl ReportingPeriod {
    /// Resolve a plan-level granularity to a concrete partitioning, using
    /// the step-up frequency for the default step-up-aligned buckets
    pub fn from_granularity(granularity: Granularity, step_up_frequency_months: u32) -> Self {
        match granularity {
            Granularity::Monthly => ReportingPeriod::Monthly,
            Granularity::Yearly => ReportingPeriod::FinancialYear,
            Granularity::StepUp => ReportingPeriod::EveryMonths(step_up_frequency_months),
        }
    }
}

/// One aggregated reporting period
///
/// Monetary fields are rounded to the nearest whole currency unit at
/// emission; the underlying ledger stays unrounded.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummaryRecord {
    /// Display label, e.g. "Year 1 (2026-27)" or "Month 1 (Apr 2026)"
    pub period_label: String,

    /// Plan year this period closes in (1-indexed)
    pub year_index: u32,

    /// Monthly installment in effect at period close
    pub monthly_installment: f64,

    /// Deposits credited during this period
    pub period_deposit: f64,

    /// Interest accrued during this period
    pub period_interest: f64,

    /// Balance at the period's last month
    pub closing_balance: f64,

    /// True when the installment sits at the monthly deposit ceiling
    pub is_capped: bool,
}

/// Aggregate a month ledger into period summary rows
///
/// A final partial group is always flushed at the last month regardless of
/// its size. An empty ledger aggregates to no rows.
pub fn aggregate_by_granularity(
    ledger: &[MonthLedgerEntry],
    period: ReportingPeriod,
) -> Vec<PeriodSummaryRecord> {
    let Some(first) = ledger.first() else {
        return Vec::new();
    };
    // Month 1 carries the plan's start year; the Year-N label formula needs it
    let start_year = first.calendar_year;
    let last_index = ledger.len() - 1;

    let mut records = Vec::new();
    let mut prev_cumulative_deposit = 0.0;
    let mut prev_cumulative_interest = 0.0;
    let mut period_index = 0u32;

    for (idx, entry) in ledger.iter().enumerate() {
        let closes = idx == last_index
            || match period {
                ReportingPeriod::Monthly => true,
                ReportingPeriod::FinancialYear => entry.calendar_month == FY_CLOSING_MONTH,
                ReportingPeriod::EveryMonths(n) => entry.absolute_month % n == 0,
            };
        if !closes {
            continue;
        }

        period_index += 1;
        records.push(PeriodSummaryRecord {
            period_label: period_label(period, period_index, entry, start_year),
            year_index: (entry.absolute_month + 11) / 12,
            monthly_installment: entry.monthly_installment.round(),
            period_deposit: (entry.cumulative_deposit - prev_cumulative_deposit).round(),
            period_interest: (entry.cumulative_interest - prev_cumulative_interest).round(),
            closing_balance: entry.balance.round(),
            is_capped: entry.is_capped,
        });
        prev_cumulative_deposit = entry.cumulative_deposit;
        prev_cumulative_interest = entry.cumulative_interest;
    }

    records
}

fn period_label(
    period: ReportingPeriod,
    period_index: u32,
    closing: &MonthLedgerEntry,
    start_year: i32,
) -> String {
    match period {
        // Whole plan years aligned to the financial year: "Year 2 (2027-28)"
        ReportingPeriod::EveryMonths(n) if n >= 12 && n % 12 == 0 => {
            let year_num = closing.absolute_month / 12;
            let fy_start = start_year + year_num as i32 - 1;
            fy_label(year_num, fy_start)
        }
        ReportingPeriod::FinancialYear => {
            // FY window from the closing entry: Jan-Mar belong to the FY that
            // started the previous April
            let fy_start = if closing.calendar_month > FY_CLOSING_MONTH {
                closing.calendar_year
            } else {
                closing.calendar_year - 1
            };
            fy_label(period_index, fy_start)
        }
        _ => format!(
            "Month {} ({} {})",
            closing.absolute_month,
            month_abbrev(closing.calendar_month),
            closing.calendar_year
        ),
    }
}

fn fy_label(year_num: u32, fy_start: i32) -> String {
    format!("Year {} ({}-{:02})", year_num, fy_start, (fy_start + 1).rem_euclid(100))
}

fn month_abbrev(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(m) => &m.name()[..3],
        Err(_) => "???",
    }
}
