//! Automation ROI - financial projection engine for business process automation
//!
//! This library provides:
//! - Year-by-year cash flow projections with ramp-up, growth and risk haircut
//! - Investment metrics (NPV, ROI, payback period, IRR)
//! - Business-process presets that map onto projection inputs
//! - Parallel batch and sensitivity runs
//! - CSV export and plain-text reports

pub mod error;
pub mod export;
pub mod input;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod templates;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use input::{InputWarning, NamedInput, ProjectionInput};
pub use projection::{project, ProjectionEngine, ProjectionResult, ProjectionSummary, YearRow};
pub use scenario::{ScenarioRunner, SweepParameter};
pub use templates::{TemplateSet, UseCaseTemplate};
