//! Error types for projections and input loading

use thiserror::Error;

/// Failure of a single projection call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Structurally invalid input (negative money, horizon out of range, out-of-range fraction)
    #[error("invalid {field}: {reason}")]
    Configuration { field: &'static str, reason: String },

    /// A ratio was requested whose denominator is zero
    #[error("cannot compute {quantity}: total cost is zero")]
    DivisionByZero { quantity: &'static str },
}

impl ProjectionError {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ProjectionError::Configuration { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, ProjectionError::DivisionByZero { .. })
    }
}

/// Failure while reading scenario or template files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown use case '{0}'")]
    UnknownUseCase(String),

    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ProjectionError,
    },
}
