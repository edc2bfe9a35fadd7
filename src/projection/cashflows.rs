//! Year-by-year output rows and summary metrics

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::input::InputWarning;

/// A single row of projection output for one year
///
/// Values are exact; rounding to currency precision is left to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,

    // Costs
    pub investment_cost: f64,
    pub maintenance_cost: f64,

    // Benefits (after ramp-up, growth and risk haircut)
    pub revenue_benefit: f64,
    pub cost_benefit: f64,
    pub gross_benefit: f64,

    // Cash flow
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
    pub discounted_cash_flow: f64,
}

/// Complete projection result
///
/// Built once by the engine and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    rows: Vec<YearRow>,
    npv: f64,
    total_benefit: f64,
    total_cost: f64,
    payback_year: Option<u32>,
    payback_period_years: Option<f64>,
    irr: Option<f64>,
    warnings: Vec<InputWarning>,
}

impl ProjectionResult {
    /// Reduce a complete row sequence into the summary metrics
    pub(crate) fn from_rows(
        rows: Vec<YearRow>,
        initial_investment: f64,
        irr: Option<f64>,
        warnings: Vec<InputWarning>,
    ) -> Self {
        let npv: f64 = rows.iter().map(|r| r.discounted_cash_flow).sum();
        let total_benefit: f64 = rows.iter().map(|r| r.gross_benefit).sum();
        let total_maintenance: f64 = rows.iter().map(|r| r.maintenance_cost).sum();

        let payback_year = rows
            .iter()
            .find(|r| r.cumulative_cash_flow >= 0.0)
            .map(|r| r.year);
        let payback_period_years = payback_year.map(|year| interpolate_payback(&rows, year));

        Self {
            rows,
            npv,
            total_benefit,
            total_cost: initial_investment + total_maintenance,
            payback_year,
            payback_period_years,
            irr,
            warnings,
        }
    }

    /// Rows for years 0..=horizon, in order
    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn npv(&self) -> f64 {
        self.npv
    }

    /// Sum of gross benefit over every year, including the implementation year
    pub fn total_benefit(&self) -> f64 {
        self.total_benefit
    }

    /// Initial investment plus maintenance over every year
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// First year whose cumulative cash flow is non-negative; `None` means beyond horizon
    pub fn payback_year(&self) -> Option<u32> {
        self.payback_year
    }

    /// Payback in fractional years, interpolated within the break-even year
    pub fn payback_period_years(&self) -> Option<f64> {
        self.payback_period_years
    }

    /// Annual internal rate of return of the net cash flows, if one exists
    pub fn irr(&self) -> Option<f64> {
        self.irr
    }

    /// Accepted-but-unusual inputs noticed during validation
    pub fn warnings(&self) -> &[InputWarning] {
        &self.warnings
    }

    pub fn time_horizon_years(&self) -> u32 {
        self.rows.last().map(|r| r.year).unwrap_or(0)
    }

    /// Return on investment as a fraction: (benefit - cost) / cost
    pub fn roi_pct(&self) -> Result<f64, ProjectionError> {
        if self.total_cost == 0.0 {
            return Err(ProjectionError::DivisionByZero { quantity: "ROI" });
        }
        Ok((self.total_benefit - self.total_cost) / self.total_cost)
    }

    /// ROI spread evenly over the projected years
    pub fn annualized_roi_pct(&self) -> Result<f64, ProjectionError> {
        let years = self.time_horizon_years().max(1) as f64;
        self.roi_pct().map(|roi| roi / years)
    }

    pub fn net_cash_flows(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.net_cash_flow).collect()
    }

    /// Get summary metrics in a form ready for display or JSON output
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            time_horizon_years: self.time_horizon_years(),
            npv: self.npv,
            roi_pct: self.roi_pct().ok(),
            annualized_roi_pct: self.annualized_roi_pct().ok(),
            payback_year: self.payback_year,
            payback_period_years: self.payback_period_years,
            total_benefit: self.total_benefit,
            total_cost: self.total_cost,
            irr: self.irr,
        }
    }
}

/// Summary metrics for a projection
///
/// ROI fields are `None` when total cost is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub time_horizon_years: u32,
    pub npv: f64,
    pub roi_pct: Option<f64>,
    pub annualized_roi_pct: Option<f64>,
    pub payback_year: Option<u32>,
    pub payback_period_years: Option<f64>,
    pub total_benefit: f64,
    pub total_cost: f64,
    pub irr: Option<f64>,
}

/// Linear interpolation between the last negative cumulative year and `year`
fn interpolate_payback(rows: &[YearRow], year: u32) -> f64 {
    if year == 0 {
        return 0.0;
    }
    let prev = rows[(year - 1) as usize].cumulative_cash_flow;
    let curr = rows[year as usize].cumulative_cash_flow;
    (year - 1) as f64 + prev.abs() / (curr - prev)
}
