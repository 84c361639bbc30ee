//! Schedule simulator for month-by-month PPF accrual

mod engine;
mod ledger;
mod state;

pub use engine::{calendar_at, simulate, ScheduleEngine};
pub use ledger::MonthLedgerEntry;
pub use state::ScheduleState;

// ============================================================================
// Statutory PPF Rules
// ============================================================================
// These model a specific statutory savings instrument and are domain rules,
// not configuration:
// - Deposits are capped per financial year (April through March)
// - Interest is computed monthly on the post-deposit balance but credited
//   to the balance only once per year, at the close of the financial year

/// Annual interest rate applied to PPF balances (7.1%)
pub const ANNUAL_RATE_PERCENT: f64 = 7.1;

/// Ceiling on total deposits within one financial year
pub const MAX_ANNUAL_DEPOSIT: f64 = 150_000.0;

/// Ceiling on a single monthly contribution (annual cap / 12)
pub const MAX_MONTHLY_DEPOSIT: f64 = 12_500.0;

/// Calendar month closing the financial year (March)
pub const FY_CLOSING_MONTH: u32 = 3;
