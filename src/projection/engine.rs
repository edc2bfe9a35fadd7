//! Core projection engine for yearly automation cash flows

use crate::error::ProjectionError;
use crate::input::{InputWarning, ProjectionInput};
use super::cashflows::{ProjectionResult, YearRow};
use super::discount::discount;
use super::irr::calculate_irr;

/// Adoption maturity by year: implementation year, years 1 and 2, then steady state
pub const RAMP_UP_FACTORS: [f64; 4] = [0.15, 0.60, 0.75, 1.00];

/// Simple (non-compounding) growth per year after year 1
pub const ANNUAL_GROWTH_RATE: f64 = 0.03;

/// Ramp-up multiplier for a projection year
pub fn ramp_factor(year: u32) -> f64 {
    let idx = (year as usize).min(RAMP_UP_FACTORS.len() - 1);
    RAMP_UP_FACTORS[idx]
}

/// Growth multiplier for a projection year, relative to year 1
pub fn growth_factor(year: u32) -> f64 {
    if year == 0 {
        1.0
    } else {
        1.0 + ANNUAL_GROWTH_RATE * (year - 1) as f64
    }
}

/// Run a projection for one parameter set
///
/// Pure and re-entrant: identical input always yields an identical result.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::new(input)?.run()
}

/// Projection engine bound to a validated input
#[derive(Debug, Clone)]
pub struct ProjectionEngine<'a> {
    input: &'a ProjectionInput,
    warnings: Vec<InputWarning>,
    base_revenue: f64,
    base_savings: f64,
    annual_maintenance: f64,
}

impl<'a> ProjectionEngine<'a> {
    /// Validate the input and precompute the year-independent potentials
    pub fn new(input: &'a ProjectionInput) -> Result<Self, ProjectionError> {
        let warnings = input.validate()?;
        for warning in &warnings {
            log::warn!("{}", warning);
        }

        let volume = input.transaction_volume as f64;
        let base_revenue =
            volume * input.avg_transaction_value * input.revenue_factor * input.revenue_lift_pct;
        let base_savings = volume
            * input.process_cost_per_transaction
            * input.savings_factor
            * input.cost_savings_pct;

        Ok(Self {
            input,
            warnings,
            base_revenue,
            base_savings,
            annual_maintenance: input.initial_investment * input.annual_maintenance_pct,
        })
    }

    /// Annual revenue potential at full adoption, before growth and risk
    pub fn base_revenue(&self) -> f64 {
        self.base_revenue
    }

    /// Annual savings potential at full adoption, before growth and risk
    pub fn base_savings(&self) -> f64 {
        self.base_savings
    }

    /// Build every year row and reduce them into the result
    pub fn run(self) -> Result<ProjectionResult, ProjectionError> {
        let horizon = self.input.time_horizon_years;
        let mut rows = Vec::with_capacity(horizon as usize + 1);
        let mut cumulative = 0.0;

        for year in 0..=horizon {
            let row = self.calculate_year(year, cumulative);
            cumulative = row.cumulative_cash_flow;
            rows.push(row);
        }

        let net: Vec<f64> = rows.iter().map(|r| r.net_cash_flow).collect();
        let irr = calculate_irr(&net);

        let result = ProjectionResult::from_rows(
            rows,
            self.input.initial_investment,
            irr,
            self.warnings,
        );

        log::debug!(
            "Projected {} years: npv={:.2}, payback={:?}",
            horizon,
            result.npv(),
            result.payback_year()
        );

        Ok(result)
    }

    /// Calculate the cash flows for a single year
    fn calculate_year(&self, year: u32, prior_cumulative: f64) -> YearRow {
        let scale = ramp_factor(year) * growth_factor(year) * (1.0 - self.input.risk_adjustment);

        let revenue_benefit = self.base_revenue * scale;
        let cost_benefit = self.base_savings * scale;
        let gross_benefit = revenue_benefit + cost_benefit;

        // Maintenance starts in the implementation year
        let maintenance_cost = self.annual_maintenance;
        let investment_cost = if year == 0 { self.input.initial_investment } else { 0.0 };

        let net_cash_flow = gross_benefit - maintenance_cost - investment_cost;

        YearRow {
            year,
            investment_cost,
            maintenance_cost,
            revenue_benefit,
            cost_benefit,
            gross_benefit,
            net_cash_flow,
            cumulative_cash_flow: prior_cumulative + net_cash_flow,
            discounted_cash_flow: discount(net_cash_flow, self.input.discount_rate, year),
        }
    }
}
