//! Print the step-up comparison table for a base plan
//! Scenario: 1000/month from April 2026, 15 years, step-up every 12 months

use ppf_projector::{
    compare_step_ups, simulate, PlanParameters, PlanSummary, DEFAULT_STEP_UP_CANDIDATES,
};

fn main() {
    env_logger::init();

    let base = PlanParameters {
        start_amount: 1000.0,
        start_month: 4,
        start_year: 2026,
        duration_years: 15,
        step_up_percent: 0.0,
        step_up_frequency_months: 12,
        ..Default::default()
    };

    let baseline = PlanSummary::from_ledger(&simulate(&base));
    println!(
        "Step-up comparison (1000/month, Apr 2026, 15 years, base maturity {:.0})",
        baseline.maturity
    );
    println!("{:<10} {:<14} {:<14}", "StepUp%", "Maturity", "Uplift");

    for row in compare_step_ups(&base, &DEFAULT_STEP_UP_CANDIDATES) {
        println!(
            "{:<10} {:<14.0} {:<14.0}",
            row.step_up_percent,
            row.maturity,
            row.maturity - baseline.maturity
        );
    }
}
