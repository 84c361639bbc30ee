//! Project a PPF contribution plan and export the period schedule
//!
//! Writes the aggregated schedule to CSV and prints the headline summary

use std::fs::File;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use ppf_projector::{
    aggregate_by_granularity, simulate, Granularity, PlanParameters, PlanSummary, ReportingPeriod,
};

#[derive(Parser, Debug)]
#[command(name = "run_plan", about = "Project a PPF contribution plan")]
struct Args {
    /// Starting monthly deposit
    #[arg(long, default_value_t = 1000.0)]
    amount: f64,

    /// Calendar month (1-12) of the first deposit
    #[arg(long, default_value_t = 4)]
    start_month: u32,

    /// Calendar year of the first deposit
    #[arg(long, default_value_t = 2026)]
    start_year: i32,

    /// Plan duration in years
    #[arg(long, default_value_t = 15)]
    years: u32,

    /// Step-up percentage applied every step-up interval
    #[arg(long, default_value_t = 0.0)]
    step_up: f64,

    /// Months between step-up applications
    #[arg(long, default_value_t = 12)]
    step_up_freq: u32,

    /// Reporting granularity: stepup, monthly or yearly
    #[arg(long, default_value = "stepup")]
    granularity: String,

    /// JSON file of plan parameters; overrides the individual flags
    #[arg(long)]
    params: Option<String>,

    /// Output CSV path for the period schedule
    #[arg(long, default_value = "plan_schedule.csv")]
    output: String,
}

fn parse_granularity(value: &str) -> anyhow::Result<Granularity> {
    match value {
        "stepup" => Ok(Granularity::StepUp),
        "monthly" => Ok(Granularity::Monthly),
        "yearly" => Ok(Granularity::Yearly),
        other => anyhow::bail!("unknown granularity '{}' (expected stepup, monthly or yearly)", other),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params: PlanParameters = match &args.params {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path))?
        }
        None => PlanParameters {
            start_amount: args.amount,
            start_month: args.start_month,
            start_year: args.start_year,
            duration_years: args.years,
            step_up_percent: args.step_up,
            step_up_frequency_months: args.step_up_freq,
            granularity: parse_granularity(&args.granularity)?,
        },
    };
    params.validate()?;

    let start = Instant::now();
    let ledger = simulate(&params);
    println!("Projected {} months in {:?}", ledger.len(), start.elapsed());

    let period =
        ReportingPeriod::from_granularity(params.granularity, params.step_up_frequency_months);
    let records = aggregate_by_granularity(&ledger, period);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    println!("Schedule written to {} ({} periods)", args.output, records.len());

    let summary = PlanSummary::from_ledger(&ledger);
    println!("\nPlan Summary:");
    if let (Some(from), Some(to)) = (params.start_date(), params.maturity_date()) {
        println!("  Window:    {} - {}", from.format("%b %Y"), to.format("%b %Y"));
    }
    println!("  Invested:  {:.0}", summary.total_invested);
    println!("  Interest:  {:.0}", summary.total_interest);
    println!("  Maturity:  {:.0}", summary.maturity);

    Ok(())
}
