//! Projection inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    InputWarning, ProjectionInput, MAX_HORIZON_YEARS, PLAUSIBLE_DISCOUNT_RATE, STANDARD_HORIZONS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};

use serde::{Deserialize, Serialize};

/// A projection input with a label for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInput {
    pub name: String,
    pub input: ProjectionInput,
}
