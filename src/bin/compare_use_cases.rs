//! Compare every use-case preset side by side at its default parameters
//!
//! Usage: cargo run --bin compare_use_cases [templates_dir]

use anyhow::{Context, Result};
use automation_roi::report::{format_amount, format_payback_period, format_ratio};
use automation_roi::templates::{load_templates, TemplateSet};
use automation_roi::{NamedInput, ScenarioRunner};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let templates = match std::env::args().nth(1).map(PathBuf::from) {
        Some(dir) => load_templates(&dir)
            .with_context(|| format!("loading templates from {}", dir.display()))?,
        None => TemplateSet::builtin(),
    };

    let scenarios: Vec<NamedInput> = templates
        .iter()
        .map(|t| NamedInput {
            name: t.name.clone(),
            input: t.to_input(),
        })
        .collect();

    println!(
        "{:<34} {:>16} {:>8} {:>24} {:>16}",
        "Use Case", "NPV", "ROI", "Payback", "Total Benefits"
    );
    println!("{}", "-".repeat(102));

    for outcome in ScenarioRunner::run_batch(&scenarios) {
        match outcome.result {
            Ok(result) => println!(
                "{:<34} {:>16} {:>8} {:>24} {:>16}",
                outcome.name,
                format_amount(result.npv()),
                format_ratio(&result.roi_pct()),
                format_payback_period(result.payback_period_years()),
                format_amount(result.total_benefit()),
            ),
            Err(e) => println!("{:<34} error: {}", outcome.name, e),
        }
    }

    Ok(())
}
