//! Automation ROI CLI
//!
//! Command-line interface for running automation investment projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use automation_roi::export::write_rows_to_path;
use automation_roi::input::load_scenarios;
use automation_roi::report::{
    self, format_amount, format_payback_year, format_percent, NOT_AVAILABLE,
};
use automation_roi::templates::{load_templates, ImpactSeries};
use automation_roi::{
    project, InputWarning, ProjectionError, ProjectionInput, ProjectionResult, ProjectionSummary,
    ScenarioRunner, SweepParameter, TemplateSet, YearRow,
};

/// Project multi-year returns of automating a business process
#[derive(Parser)]
#[command(name = "automation-roi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one parameter set and print metrics and the yearly table
    Project {
        #[command(flatten)]
        base: BaseArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the yearly rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Re-run the projection for several values of one parameter
    Sweep {
        #[command(flatten)]
        base: BaseArgs,

        /// Parameter to vary (discount-rate, risk-adjustment, revenue-lift, cost-savings,
        /// initial-investment, maintenance-pct)
        #[arg(long)]
        parameter: SweepParameter,

        /// Comma-separated values to try
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        #[arg(long)]
        json: bool,
    },
    /// Project every scenario in a CSV file
    Batch {
        /// CSV file with one scenario per row
        #[arg(long)]
        scenarios: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List the available use-case presets
    List {
        /// Directory containing use_case_templates.csv
        #[arg(long, env = "ROI_TEMPLATES")]
        templates: Option<PathBuf>,
    },
}

/// Where the base input comes from, plus per-field overrides
#[derive(Args)]
struct BaseArgs {
    /// Use-case preset supplying the defaults
    #[arg(long, env = "ROI_USE_CASE", default_value = "order-management")]
    use_case: String,

    /// Directory containing use_case_templates.csv (built-in presets if omitted)
    #[arg(long, env = "ROI_TEMPLATES")]
    templates: Option<PathBuf>,

    /// JSON file with a complete parameter set; replaces the preset
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, env = "ROI_INITIAL_INVESTMENT")]
    initial_investment: Option<f64>,

    #[arg(long, env = "ROI_MAINTENANCE_PCT")]
    maintenance_pct: Option<f64>,

    #[arg(long, env = "ROI_VOLUME")]
    volume: Option<u64>,

    #[arg(long, env = "ROI_TRANSACTION_VALUE")]
    transaction_value: Option<f64>,

    #[arg(long, env = "ROI_PROCESS_COST")]
    process_cost: Option<f64>,

    #[arg(long, env = "ROI_REVENUE_LIFT")]
    revenue_lift: Option<f64>,

    #[arg(long, env = "ROI_COST_SAVINGS")]
    cost_savings: Option<f64>,

    #[arg(long, env = "ROI_DISCOUNT_RATE")]
    discount_rate: Option<f64>,

    #[arg(long, env = "ROI_RISK_ADJUSTMENT")]
    risk_adjustment: Option<f64>,

    /// Years after implementation (3, 5 or 7)
    #[arg(long, env = "ROI_HORIZON")]
    horizon: Option<u32>,
}

#[derive(Serialize)]
struct ProjectOutput<'a> {
    use_case: Option<&'a str>,
    input: &'a ProjectionInput,
    summary: ProjectionSummary,
    rows: &'a [YearRow],
    impact: Vec<ImpactSeries>,
    warnings: &'a [InputWarning],
}

#[derive(Serialize)]
struct OutcomeOutput {
    label: String,
    summary: Option<ProjectionSummary>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project { base, json, csv } => run_project(&base, json, csv.as_deref()),
        Commands::Sweep {
            base,
            parameter,
            values,
            json,
        } => run_sweep(&base, parameter, &values, json),
        Commands::Batch { scenarios, json } => run_batch(&scenarios, json),
        Commands::List { templates } => run_list(templates.as_deref()),
    }
}

fn template_set(dir: Option<&Path>) -> Result<TemplateSet> {
    match dir {
        Some(dir) => load_templates(dir)
            .with_context(|| format!("loading templates from {}", dir.display())),
        None => Ok(TemplateSet::builtin()),
    }
}

impl BaseArgs {
    /// Build the input: JSON file or preset, then flag overrides
    fn resolve(&self, templates: &TemplateSet) -> Result<ProjectionInput> {
        let mut input = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening input file {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing input file {}", path.display()))?
            }
            None => templates.require(&self.use_case)?.to_input(),
        };

        if let Some(v) = self.initial_investment {
            input.initial_investment = v;
        }
        if let Some(v) = self.maintenance_pct {
            input.annual_maintenance_pct = v;
        }
        if let Some(v) = self.volume {
            input.transaction_volume = v;
        }
        if let Some(v) = self.transaction_value {
            input.avg_transaction_value = v;
        }
        if let Some(v) = self.process_cost {
            input.process_cost_per_transaction = v;
        }
        if let Some(v) = self.revenue_lift {
            input.revenue_lift_pct = v;
        }
        if let Some(v) = self.cost_savings {
            input.cost_savings_pct = v;
        }
        if let Some(v) = self.discount_rate {
            input.discount_rate = v;
        }
        if let Some(v) = self.risk_adjustment {
            input.risk_adjustment = v;
        }
        if let Some(v) = self.horizon {
            input.time_horizon_years = v;
        }

        Ok(input)
    }
}

fn run_project(base: &BaseArgs, json: bool, csv: Option<&Path>) -> Result<()> {
    let templates = template_set(base.templates.as_deref())?;
    let input = base.resolve(&templates)?;
    let result = project(&input).context("projection failed")?;

    // Impact categories only make sense for a preset
    let template = match base.input {
        Some(_) => None,
        None => templates.get(&base.use_case),
    };

    if let Some(path) = csv {
        write_rows_to_path(path, result.rows())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {} rows to {}", result.rows().len(), path.display());
    }

    if json {
        let output = ProjectOutput {
            use_case: template.map(|t| t.key.as_str()),
            input: &input,
            summary: result.summary(),
            rows: result.rows(),
            impact: template
                .map(|t| t.impact_breakdown(result.rows()))
                .unwrap_or_default(),
            warnings: result.warnings(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(t) = template {
        println!("{}", t.name);
        println!("{}\n", t.description);
    }
    println!("{}", report::render_summary(&result));
    println!("{}", report::render_table(&result));

    if let Some(t) = template {
        println!("Impact by category:");
        for series in t.impact_breakdown(result.rows()) {
            let total: f64 = series.values.iter().map(|(_, v)| v).sum();
            println!("  {:<30} {:>16}", series.category, format_amount(total));
        }
    }

    Ok(())
}

fn run_sweep(base: &BaseArgs, parameter: SweepParameter, values: &[f64], json: bool) -> Result<()> {
    let templates = template_set(base.templates.as_deref())?;
    let runner = ScenarioRunner::new(base.resolve(&templates)?);
    let points = runner.sweep(parameter, values);

    let outputs: Vec<OutcomeOutput> = points
        .iter()
        .map(|p| outcome_output(format!("{}={}", parameter, p.value), &p.result))
        .collect();
    print_outcomes(&outputs, json)
}

fn run_batch(path: &Path, json: bool) -> Result<()> {
    let scenarios =
        load_scenarios(path).with_context(|| format!("loading scenarios from {}", path.display()))?;
    let outcomes = ScenarioRunner::run_batch(&scenarios);

    let outputs: Vec<OutcomeOutput> = outcomes
        .iter()
        .map(|o| outcome_output(o.name.clone(), &o.result))
        .collect();
    print_outcomes(&outputs, json)
}

fn run_list(dir: Option<&Path>) -> Result<()> {
    let templates = template_set(dir)?;
    for t in templates.iter() {
        println!("{:<20} {}", t.key, t.name);
        println!("{:<20} {}", "", t.description);
    }
    Ok(())
}

fn outcome_output(
    label: String,
    result: &Result<ProjectionResult, ProjectionError>,
) -> OutcomeOutput {
    match result {
        Ok(r) => OutcomeOutput {
            label,
            summary: Some(r.summary()),
            error: None,
        },
        Err(e) => OutcomeOutput {
            label,
            summary: None,
            error: Some(e.to_string()),
        },
    }
}

fn print_outcomes(outputs: &[OutcomeOutput], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outputs)?);
        return Ok(());
    }

    println!(
        "{:<28} {:>16} {:>8} {:>16} {:>16}",
        "Scenario", "NPV", "ROI", "Payback", "Total Benefits"
    );
    println!("{}", "-".repeat(88));
    for output in outputs {
        match (&output.summary, &output.error) {
            (Some(s), _) => {
                let roi = s
                    .roi_pct
                    .map(|r| format_percent(r, 0))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                println!(
                    "{:<28} {:>16} {:>8} {:>16} {:>16}",
                    output.label,
                    format_amount(s.npv),
                    roi,
                    format_payback_year(s.payback_year),
                    format_amount(s.total_benefit)
                );
            }
            (None, Some(e)) => println!("{:<28} error: {}", output.label, e),
            (None, None) => {}
        }
    }
    Ok(())
}
