//! Business-process presets and their mapping onto projection inputs
//!
//! The engine never sees a preset key; callers pick a template, apply
//! overrides and hand the resulting `ProjectionInput` to `project`.

pub mod loader;

pub use loader::{load_templates, load_templates_from_reader, DEFAULT_TEMPLATES_PATH};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::input::ProjectionInput;
use crate::projection::YearRow;

/// Discount rate offered by default for every preset
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Default number of years after implementation
pub const DEFAULT_TIME_HORIZON: u32 = 5;

/// Share of each year's benefit attributed to the first, second and third impact category
pub const IMPACT_WEIGHTS: [f64; 3] = [1.2 / 3.0, 1.0 / 3.0, 0.8 / 3.0];

/// Default parameters and labels for one business process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseTemplate {
    pub key: String,
    pub name: String,
    pub description: String,
    pub base_volume: u64,
    pub base_value: f64,
    pub process_cost: f64,
    pub revenue_factor: f64,
    pub savings_factor: f64,
    pub default_revenue_lift: f64,
    pub default_cost_savings: f64,
    pub default_investment: f64,
    pub default_maintenance_pct: f64,
    pub impact_categories: [String; 3],
}

/// Benefit attributed to one impact category, per post-implementation year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSeries {
    pub category: String,
    pub values: Vec<(u32, f64)>,
}

impl UseCaseTemplate {
    /// Projection input with every parameter at its preset default
    pub fn to_input(&self) -> ProjectionInput {
        ProjectionInput {
            initial_investment: self.default_investment,
            annual_maintenance_pct: self.default_maintenance_pct,
            transaction_volume: self.base_volume,
            avg_transaction_value: self.base_value,
            process_cost_per_transaction: self.process_cost,
            revenue_lift_pct: self.default_revenue_lift,
            cost_savings_pct: self.default_cost_savings,
            revenue_factor: self.revenue_factor,
            savings_factor: self.savings_factor,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            risk_adjustment: 0.0,
            time_horizon_years: DEFAULT_TIME_HORIZON,
        }
    }

    /// Split gross benefit for years 1..N across the three impact categories
    pub fn impact_breakdown(&self, rows: &[YearRow]) -> Vec<ImpactSeries> {
        self.impact_categories
            .iter()
            .zip(IMPACT_WEIGHTS)
            .map(|(category, weight)| ImpactSeries {
                category: category.clone(),
                values: rows
                    .iter()
                    .filter(|r| r.year > 0)
                    .map(|r| (r.year, r.gross_benefit * weight))
                    .collect(),
            })
            .collect()
    }
}

/// Immutable lookup table of presets, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    templates: Vec<UseCaseTemplate>,
}

impl TemplateSet {
    pub fn new(templates: Vec<UseCaseTemplate>) -> Self {
        Self { templates }
    }

    /// The four standard presets
    pub fn builtin() -> Self {
        Self::new(vec![
            template(
                "order-management",
                "Order Management & Validation",
                "Improve order capture, validation, and exception handling for complex product configurations",
                (50_000, 2_500.0, 85.0),
                (0.65, 0.35),
                (0.18, 0.25, 500_000.0, 0.20),
                ["Process Automation", "Error Reduction", "Cycle Time Improvement"],
            ),
            template(
                "invoice-processing",
                "Invoice Processing & Approval",
                "Automate invoice validation, exception handling, and payment optimization",
                (120_000, 3_500.0, 45.0),
                (0.45, 0.55),
                (0.22, 0.30, 450_000.0, 0.18),
                ["Straight-Through Processing", "Early Payment Capture", "Compliance"],
            ),
            template(
                "claims-processing",
                "Insurance Claims Adjudication",
                "Accelerate claims processing with automated validation and fraud detection",
                (85_000, 4_200.0, 120.0),
                (0.50, 0.50),
                (0.28, 0.35, 650_000.0, 0.22),
                ["Automation Rate", "Fraud Prevention", "Cycle Time"],
            ),
            template(
                "customer-service",
                "Customer Service Automation",
                "Deflect routine inquiries and improve agent productivity with AI assistance",
                (250_000, 85.0, 12.0),
                (0.40, 0.60),
                (0.15, 0.45, 380_000.0, 0.25),
                ["Deflection & Automation", "Customer Retention", "Agent Productivity"],
            ),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&UseCaseTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// Like `get`, but unknown keys are an error
    pub fn require(&self, key: &str) -> Result<&UseCaseTemplate, LoadError> {
        self.get(key)
            .ok_or_else(|| LoadError::UnknownUseCase(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UseCaseTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn template(
    key: &str,
    name: &str,
    description: &str,
    (base_volume, base_value, process_cost): (u64, f64, f64),
    (revenue_factor, savings_factor): (f64, f64),
    (default_revenue_lift, default_cost_savings, default_investment, default_maintenance_pct): (
        f64,
        f64,
        f64,
        f64,
    ),
    impact_categories: [&str; 3],
) -> UseCaseTemplate {
    UseCaseTemplate {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_volume,
        base_value,
        process_cost,
        revenue_factor,
        savings_factor,
        default_revenue_lift,
        default_cost_savings,
        default_investment,
        default_maintenance_pct,
        impact_categories: impact_categories.map(str::to_string),
    }
}
