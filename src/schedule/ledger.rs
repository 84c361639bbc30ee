//! Month-level ledger output of the schedule simulator

use serde::Serialize;

/// One simulated month of the accrual schedule
///
/// Monetary fields carry unrounded values; rounding happens at the reporting
/// layer so intermediate drift never compounds.
#[derive(Debug, Clone, Serialize)]
pub struct MonthLedgerEntry {
    /// Position in the schedule, 1-indexed
    pub absolute_month: u32,

    /// Calendar month (1-12)
    pub calendar_month: u32,

    /// Calendar year
    pub calendar_year: i32,

    /// Contribution amount in effect this month (post step-up, pre FY cap)
    pub monthly_installment: f64,

    /// Amount actually credited this month after the financial-year cap
    pub deposit: f64,

    /// Interest accrued this month on the post-deposit balance
    pub monthly_interest: f64,

    /// Account balance after deposit and any FY-end interest credit
    ///
    /// Interest is credited only in March, so between April and the following
    /// February the balance lags the accrued interest. That is the statutory
    /// behavior, not a bug.
    pub balance: f64,

    /// Total deposits credited since month 1
    pub cumulative_deposit: f64,

    /// Total interest accrued since month 1 (credited or not)
    pub cumulative_interest: f64,

    /// True when the installment sits at (or within 1 unit of) the monthly
    /// deposit ceiling
    pub is_capped: bool,
}
