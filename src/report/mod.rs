//! Period aggregation and cross-scenario reporting over month ledgers

mod aggregate;
mod compare;
mod summary;

pub use aggregate::{aggregate_by_granularity, PeriodSummaryRecord, ReportingPeriod};
pub use compare::{compare_step_ups, ComparisonRow, DEFAULT_STEP_UP_CANDIDATES};
pub use summary::PlanSummary;
