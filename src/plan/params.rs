//! Plan parameters for a monthly PPF contribution schedule
//!
//! Parameters are clamped, not rejected, where the statutory rules define a
//! floor or ceiling; only structurally unusable values (month out of range,
//! zero step-up frequency) fail validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reporting granularity for the aggregated schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One summary row per step-up interval (the plan's natural cadence)
    #[default]
    StepUp,
    /// One summary row per simulated month
    Monthly,
    /// One summary row per financial year (April through March)
    Yearly,
}

/// Validation failures for plan parameters
///
/// The schedule engine assumes validated input; in particular it divides by
/// `step_up_frequency_months` and never guards against zero itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("step-up frequency must be at least 1 month (got {0})")]
    InvalidStepUpFrequency(u32),

    #[error("start month must be in 1..=12 (got {0})")]
    InvalidStartMonth(u32),
}

/// Parameters for a contribution plan projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Initial monthly contribution amount
    ///
    /// The engine raises sub-unit amounts to 1 and clamps anything above the
    /// monthly deposit ceiling; stricter domain limits (e.g. a 500 floor)
    /// belong to the caller.
    #[serde(default = "default_start_amount")]
    pub start_amount: f64,

    /// Calendar month (1-12) of the first simulated month
    #[serde(default = "default_start_month")]
    pub start_month: u32,

    /// Calendar year of the first simulated month
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Plan duration in years; total simulated months = duration_years * 12
    #[serde(default = "default_duration_years")]
    pub duration_years: u32,

    /// Percentage increase applied periodically to the monthly contribution
    #[serde(default)]
    pub step_up_percent: f64,

    /// Months between step-up applications; also the default reporting period
    #[serde(default = "default_step_up_frequency")]
    pub step_up_frequency_months: u32,

    /// Reporting granularity for the aggregated schedule
    #[serde(default)]
    pub granularity: Granularity,
}

fn default_start_amount() -> f64 {
    1000.0
}
fn default_start_month() -> u32 {
    3
}
fn default_start_year() -> i32 {
    2026
}
fn default_duration_years() -> u32 {
    60
}
fn default_step_up_frequency() -> u32 {
    12
}

impl Default for PlanParameters {
    fn default() -> Self {
        Self {
            start_amount: 1000.0,
            start_month: 3,
            start_year: 2026,
            duration_years: 60,
            step_up_percent: 0.0,
            step_up_frequency_months: 12,
            granularity: Granularity::StepUp,
        }
    }
}

impl PlanParameters {
    /// Check structural validity of the parameters
    ///
    /// Amount clamping is not validation: out-of-range amounts are handled by
    /// the engine. A zero duration is also fine (it yields an empty ledger).
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.step_up_frequency_months == 0 {
            return Err(PlanError::InvalidStepUpFrequency(
                self.step_up_frequency_months,
            ));
        }
        if self.start_month < 1 || self.start_month > 12 {
            return Err(PlanError::InvalidStartMonth(self.start_month));
        }
        Ok(())
    }

    /// Total number of simulated months
    pub fn total_months(&self) -> u32 {
        self.duration_years * 12
    }

    /// First day of the first simulated month
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, self.start_month, 1)
    }

    /// First day of the last simulated month
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        if self.duration_years == 0 {
            return self.start_date();
        }
        let offset = self.total_months() - 1;
        let month0 = self.start_month - 1 + offset;
        let year = self.start_year + (month0 / 12) as i32;
        NaiveDate::from_ymd_opt(year, month0 % 12 + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_frequency() {
        let params = PlanParameters {
            step_up_frequency_months: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(PlanError::InvalidStepUpFrequency(0))
        );
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let params = PlanParameters {
            start_month: 13,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(PlanError::InvalidStartMonth(13)));

        let params = PlanParameters {
            start_month: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(PlanError::InvalidStartMonth(0)));
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let params: PlanParameters = serde_json::from_str("{}").expect("Failed to parse");

        assert_eq!(params.start_amount, 1000.0);
        assert_eq!(params.start_month, 3);
        assert_eq!(params.start_year, 2026);
        assert_eq!(params.duration_years, 60);
        assert_eq!(params.step_up_percent, 0.0);
        assert_eq!(params.step_up_frequency_months, 12);
        assert_eq!(params.granularity, Granularity::StepUp);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_granularity_parses_lowercase() {
        let params: PlanParameters =
            serde_json::from_str(r#"{"granularity": "yearly"}"#).expect("Failed to parse");
        assert_eq!(params.granularity, Granularity::Yearly);
    }

    #[test]
    fn test_maturity_date() {
        let params = PlanParameters {
            start_month: 4,
            start_year: 2024,
            duration_years: 1,
            ..Default::default()
        };
        // 12 months starting April 2024 end in March 2025
        assert_eq!(
            params.maturity_date(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );

        let params = PlanParameters {
            start_month: 3,
            start_year: 2026,
            duration_years: 2,
            ..Default::default()
        };
        // 24 months starting March 2026 end in February 2028
        assert_eq!(
            params.maturity_date(),
            NaiveDate::from_ymd_opt(2028, 2, 1)
        );
    }
}
