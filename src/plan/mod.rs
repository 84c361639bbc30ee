//! Contribution plan parameters and validation

pub mod params;

pub use params::{Granularity, PlanError, PlanParameters};
