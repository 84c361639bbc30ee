//! PPF Projector - deterministic accrual schedule engine for PPF contribution plans
//!
//! This library provides:
//! - Month-by-month simulation of an interest-bearing PPF balance
//! - Financial-year deposit capping and annual (March) interest crediting
//! - Step-up contribution plans with configurable frequency
//! - Period aggregation (monthly, yearly, or step-up-aligned buckets)
//! - Multi-scenario step-up comparison tables

pub mod plan;
pub mod report;
pub mod schedule;

// Re-export commonly used types
pub use plan::{Granularity, PlanError, PlanParameters};
pub use report::{
    aggregate_by_granularity, compare_step_ups, ComparisonRow, PeriodSummaryRecord, PlanSummary,
    ReportingPeriod, DEFAULT_STEP_UP_CANDIDATES,
};
pub use schedule::{simulate, MonthLedgerEntry, ScheduleEngine, ScheduleState};
