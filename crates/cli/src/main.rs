use anyhow::{Context, Result};
use clap::Parser;
use escape_core::{Chart, EscapePlan, plan_escape};
use log::info;
use std::fs;

/// Search for an acceleration sequence that escapes the asteroid belt
/// described by a chart file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the chart JSON file
    #[arg(default_value = "v3_chart.json")]
    chart: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let plan = run(&args.chart)?;

    info!("{:?}", plan.accelerations);
    info!("{}", plan.escaped);
    Ok(())
}

fn run(path: &str) -> Result<EscapePlan> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart file: {path}. Perhaps try `v3_chart.json`?"))?;
    let chart = Chart::from_json_str(&data).with_context(|| "Failed to deserialize chart JSON")?;
    let belt = chart.into_belt().map_err(|e| anyhow::anyhow!("Invalid chart: {e}"))?;

    let plan = plan_escape(&belt)
        .map_err(|e| anyhow::anyhow!("Search gave up: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("No admissible move from the launch position"))?;
    Ok(plan)
}
