//! Projection engine for automation cash flows and investment metrics

mod cashflows;
mod discount;
mod engine;
mod irr;

pub use cashflows::{ProjectionResult, ProjectionSummary, YearRow};
pub use discount::{discount, npv};
pub use engine::{
    growth_factor, project, ramp_factor, ProjectionEngine, ANNUAL_GROWTH_RATE, RAMP_UP_FACTORS,
};
pub use irr::calculate_irr;
