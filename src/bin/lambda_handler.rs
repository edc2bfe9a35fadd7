//! AWS Lambda handler for running automation projections
//!
//! Accepts a use-case key (or a complete parameter set) plus optional overrides as JSON
//! and returns the summary metrics, yearly rows and impact breakdown.

use automation_roi::templates::ImpactSeries;
use automation_roi::{
    project, InputWarning, ProjectionInput, ProjectionSummary, TemplateSet, YearRow,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input configuration for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Preset supplying defaults (default: order-management)
    #[serde(default = "default_use_case")]
    pub use_case: String,

    /// Complete parameter set; takes precedence over `use_case`
    #[serde(default)]
    pub input: Option<ProjectionInput>,

    #[serde(default)]
    pub initial_investment: Option<f64>,

    #[serde(default)]
    pub annual_maintenance_pct: Option<f64>,

    #[serde(default)]
    pub transaction_volume: Option<u64>,

    #[serde(default)]
    pub revenue_lift_pct: Option<f64>,

    #[serde(default)]
    pub cost_savings_pct: Option<f64>,

    #[serde(default)]
    pub discount_rate: Option<f64>,

    #[serde(default)]
    pub risk_adjustment: Option<f64>,

    #[serde(default)]
    pub time_horizon_years: Option<u32>,
}

fn default_use_case() -> String {
    "order-management".to_string()
}

#[derive(Debug, Serialize, Default)]
pub struct ProjectionResponse {
    use_case: Option<String>,
    input: Option<ProjectionInput>,
    summary: Option<ProjectionSummary>,
    rows: Vec<YearRow>,
    impact: Vec<ImpactSeries>,
    warnings: Vec<InputWarning>,
    execution_time_ms: u64,
    error: Option<String>,
}

impl ProjectionRequest {
    fn resolve(&self, templates: &TemplateSet) -> Result<ProjectionInput, String> {
        let mut input = match &self.input {
            Some(input) => input.clone(),
            None => templates
                .get(&self.use_case)
                .ok_or_else(|| format!("unknown use case '{}'", self.use_case))?
                .to_input(),
        };

        if let Some(v) = self.initial_investment {
            input.initial_investment = v;
        }
        if let Some(v) = self.annual_maintenance_pct {
            input.annual_maintenance_pct = v;
        }
        if let Some(v) = self.transaction_volume {
            input.transaction_volume = v;
        }
        if let Some(v) = self.revenue_lift_pct {
            input.revenue_lift_pct = v;
        }
        if let Some(v) = self.cost_savings_pct {
            input.cost_savings_pct = v;
        }
        if let Some(v) = self.discount_rate {
            input.discount_rate = v;
        }
        if let Some(v) = self.risk_adjustment {
            input.risk_adjustment = v;
        }
        if let Some(v) = self.time_horizon_years {
            input.time_horizon_years = v;
        }

        Ok(input)
    }
}

fn error_response(message: String, start: Instant) -> ProjectionResponse {
    ProjectionResponse {
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: Some(message),
        ..Default::default()
    }
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let start = Instant::now();
    let request = event.payload;
    let templates = TemplateSet::builtin();

    let input = match request.resolve(&templates) {
        Ok(input) => input,
        Err(message) => return Ok(error_response(message, start)),
    };

    let result = match project(&input) {
        Ok(result) => result,
        Err(e) => {
            log::info!("Rejected projection request: {}", e);
            return Ok(error_response(e.to_string(), start));
        }
    };

    let template = match request.input {
        Some(_) => None,
        None => templates.get(&request.use_case),
    };

    Ok(ProjectionResponse {
        use_case: template.map(|t| t.key.clone()),
        summary: Some(result.summary()),
        rows: result.rows().to_vec(),
        impact: template
            .map(|t| t.impact_breakdown(result.rows()))
            .unwrap_or_default(),
        warnings: result.warnings().to_vec(),
        input: Some(input),
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
