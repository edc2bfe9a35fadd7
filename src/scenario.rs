//! Scenario runner for batch projections and sensitivity sweeps
//!
//! Each evaluation is an independent call to the pure engine, so batches run
//! in parallel without shared state. Results come back in input order.

use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ProjectionError;
use crate::input::{NamedInput, ProjectionInput};
use crate::projection::{project, ProjectionResult};
use crate::templates::UseCaseTemplate;

/// Parameter varied by a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepParameter {
    DiscountRate,
    RiskAdjustment,
    RevenueLift,
    CostSavings,
    InitialInvestment,
    MaintenancePct,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 6] = [
        SweepParameter::DiscountRate,
        SweepParameter::RiskAdjustment,
        SweepParameter::RevenueLift,
        SweepParameter::CostSavings,
        SweepParameter::InitialInvestment,
        SweepParameter::MaintenancePct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SweepParameter::DiscountRate => "discount-rate",
            SweepParameter::RiskAdjustment => "risk-adjustment",
            SweepParameter::RevenueLift => "revenue-lift",
            SweepParameter::CostSavings => "cost-savings",
            SweepParameter::InitialInvestment => "initial-investment",
            SweepParameter::MaintenancePct => "maintenance-pct",
        }
    }

    /// Copy of `base` with this parameter set to `value`
    pub fn apply(&self, base: &ProjectionInput, value: f64) -> ProjectionInput {
        let mut input = base.clone();
        match self {
            SweepParameter::DiscountRate => input.discount_rate = value,
            SweepParameter::RiskAdjustment => input.risk_adjustment = value,
            SweepParameter::RevenueLift => input.revenue_lift_pct = value,
            SweepParameter::CostSavings => input.cost_savings_pct = value,
            SweepParameter::InitialInvestment => input.initial_investment = value,
            SweepParameter::MaintenancePct => input.annual_maintenance_pct = value,
        }
        input
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepParameter::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = SweepParameter::ALL.iter().map(|p| p.as_str()).collect();
                format!("unknown parameter '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Result of one named scenario in a batch
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult, ProjectionError>,
}

/// One point of a sensitivity sweep
#[derive(Debug, Clone)]
pub struct SensitivityPoint {
    pub value: f64,
    pub result: Result<ProjectionResult, ProjectionError>,
}

/// Runs variations of a base input
///
/// # Example
/// ```
/// use automation_roi::scenario::{ScenarioRunner, SweepParameter};
/// use automation_roi::templates::TemplateSet;
///
/// let templates = TemplateSet::builtin();
/// let runner = ScenarioRunner::from_template(templates.get("customer-service").unwrap());
/// let points = runner.sweep(SweepParameter::DiscountRate, &[0.05, 0.08, 0.12]);
/// assert_eq!(points.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionInput,
}

impl ScenarioRunner {
    pub fn new(base: ProjectionInput) -> Self {
        Self { base }
    }

    /// Start from a preset's default parameters
    pub fn from_template(template: &UseCaseTemplate) -> Self {
        Self::new(template.to_input())
    }

    /// Project the base input
    pub fn run(&self) -> Result<ProjectionResult, ProjectionError> {
        project(&self.base)
    }

    /// Project independent scenarios in parallel
    pub fn run_batch(scenarios: &[NamedInput]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: project(&scenario.input),
            })
            .collect()
    }

    /// Project the base input once per value of `parameter`
    pub fn sweep(&self, parameter: SweepParameter, values: &[f64]) -> Vec<SensitivityPoint> {
        values
            .par_iter()
            .map(|&value| SensitivityPoint {
                value,
                result: project(&parameter.apply(&self.base, value)),
            })
            .collect()
    }

    pub fn base(&self) -> &ProjectionInput {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ProjectionInput {
        &mut self.base
    }
}
