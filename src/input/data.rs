//! Projection input parameters and their range checks

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Horizons offered to users; others are accepted but flagged
pub const STANDARD_HORIZONS: [u32; 3] = [3, 5, 7];

/// Longest horizon accepted at all
pub const MAX_HORIZON_YEARS: u32 = 50;

/// Discount rates outside this band are economically implausible
pub const PLAUSIBLE_DISCOUNT_RATE: (f64, f64) = (0.0, 0.30);

/// One parameter set for a projection run
///
/// All fractions are decimals (0.20 = 20%). Money values are plain `f64`
/// in whatever currency the caller uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Upfront implementation cost, charged once in year 0
    pub initial_investment: f64,

    /// Yearly maintenance as a share of the initial investment, charged from year 0
    pub annual_maintenance_pct: f64,

    /// Transactions processed per year
    pub transaction_volume: u64,

    /// Average value of one transaction
    pub avg_transaction_value: f64,

    /// Current cost to process one transaction
    pub process_cost_per_transaction: f64,

    /// Expected revenue increase
    pub revenue_lift_pct: f64,

    /// Expected process cost reduction
    pub cost_savings_pct: f64,

    /// Share of the revenue lift attributable to the initiative
    pub revenue_factor: f64,

    /// Share of the cost reduction attributable to the initiative
    pub savings_factor: f64,

    /// Cost of capital used for NPV
    pub discount_rate: f64,

    /// Haircut applied to every benefit line
    #[serde(default)]
    pub risk_adjustment: f64,

    /// Number of years projected after the implementation year
    pub time_horizon_years: u32,
}

/// Accepted input that is still worth surfacing to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputWarning {
    ImplausibleDiscountRate(f64),
    NonStandardHorizon(u32),
}

impl std::fmt::Display for InputWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputWarning::ImplausibleDiscountRate(rate) => write!(
                f,
                "discount rate {:.2}% is outside the usual {:.0}%-{:.0}% range",
                rate * 100.0,
                PLAUSIBLE_DISCOUNT_RATE.0 * 100.0,
                PLAUSIBLE_DISCOUNT_RATE.1 * 100.0
            ),
            InputWarning::NonStandardHorizon(years) => {
                write!(f, "time horizon of {} years is not one of 3, 5 or 7", years)
            }
        }
    }
}

impl ProjectionInput {
    /// Check every field against its allowed range.
    ///
    /// Fails on the first violation; returns the warnings for values that
    /// are allowed but unusual.
    pub fn validate(&self) -> Result<Vec<InputWarning>, ProjectionError> {
        check_money("initial_investment", self.initial_investment)?;
        check_money("avg_transaction_value", self.avg_transaction_value)?;
        check_money("process_cost_per_transaction", self.process_cost_per_transaction)?;

        check_fraction("annual_maintenance_pct", self.annual_maintenance_pct)?;
        check_fraction("revenue_lift_pct", self.revenue_lift_pct)?;
        check_fraction("cost_savings_pct", self.cost_savings_pct)?;
        check_fraction("revenue_factor", self.revenue_factor)?;
        check_fraction("savings_factor", self.savings_factor)?;
        check_fraction("risk_adjustment", self.risk_adjustment)?;

        if !self.discount_rate.is_finite() {
            return Err(ProjectionError::configuration(
                "discount_rate",
                format!("must be a finite number, got {}", self.discount_rate),
            ));
        }
        if self.discount_rate <= -1.0 {
            return Err(ProjectionError::configuration(
                "discount_rate",
                format!("must be greater than -1, got {}", self.discount_rate),
            ));
        }

        if self.time_horizon_years < 1 {
            return Err(ProjectionError::configuration(
                "time_horizon_years",
                format!("must be at least 1, got {}", self.time_horizon_years),
            ));
        }
        if self.time_horizon_years > MAX_HORIZON_YEARS {
            return Err(ProjectionError::configuration(
                "time_horizon_years",
                format!(
                    "must be at most {}, got {}",
                    MAX_HORIZON_YEARS, self.time_horizon_years
                ),
            ));
        }

        let mut warnings = Vec::new();
        let (low, high) = PLAUSIBLE_DISCOUNT_RATE;
        if self.discount_rate < low || self.discount_rate > high {
            warnings.push(InputWarning::ImplausibleDiscountRate(self.discount_rate));
        }
        if !STANDARD_HORIZONS.contains(&self.time_horizon_years) {
            warnings.push(InputWarning::NonStandardHorizon(self.time_horizon_years));
        }

        Ok(warnings)
    }
}

fn check_money(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::configuration(
            field,
            format!("must be a finite amount, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(ProjectionError::configuration(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ProjectionError::configuration(
            field,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ProjectionInput {
        ProjectionInput {
            initial_investment: 500_000.0,
            annual_maintenance_pct: 0.20,
            transaction_volume: 100_000,
            avg_transaction_value: 1_000.0,
            process_cost_per_transaction: 50.0,
            revenue_lift_pct: 0.20,
            cost_savings_pct: 0.25,
            revenue_factor: 0.65,
            savings_factor: 0.35,
            discount_rate: 0.08,
            risk_adjustment: 0.0,
            time_horizon_years: 5,
        }
    }

    #[test]
    fn test_valid_input_has_no_warnings() {
        assert_eq!(sample_input().validate().unwrap(), Vec::new());
    }

    #[test]
    fn test_negative_money_rejected() {
        let input = ProjectionInput {
            initial_investment: -1.0,
            ..sample_input()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::Configuration { field: "initial_investment", .. }
        ));

        let input = ProjectionInput {
            process_cost_per_transaction: -0.01,
            ..sample_input()
        };
        assert!(input.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_nan_money_rejected() {
        let input = ProjectionInput {
            avg_transaction_value: f64::NAN,
            ..sample_input()
        };
        assert!(input.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_fraction_out_of_range_rejected() {
        let input = ProjectionInput {
            risk_adjustment: 1.5,
            ..sample_input()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::Configuration { field: "risk_adjustment", .. }
        ));

        let input = ProjectionInput {
            revenue_factor: -0.1,
            ..sample_input()
        };
        assert!(input.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let input = ProjectionInput {
            time_horizon_years: 0,
            ..sample_input()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::Configuration { field: "time_horizon_years", .. }
        ));
    }

    #[test]
    fn test_discount_rate_bounds() {
        let input = ProjectionInput {
            discount_rate: -1.0,
            ..sample_input()
        };
        assert!(input.validate().unwrap_err().is_configuration());

        // Implausible rates are flagged, not rejected
        let input = ProjectionInput {
            discount_rate: 0.45,
            ..sample_input()
        };
        assert_eq!(
            input.validate().unwrap(),
            vec![InputWarning::ImplausibleDiscountRate(0.45)]
        );
    }

    #[test]
    fn test_non_standard_horizon_flagged() {
        for years in [1, 4, 6, MAX_HORIZON_YEARS] {
            let input = ProjectionInput {
                time_horizon_years: years,
                ..sample_input()
            };
            assert_eq!(
                input.validate().unwrap(),
                vec![InputWarning::NonStandardHorizon(years)]
            );
        }
    }

    #[test]
    fn test_excessive_horizon_rejected() {
        for years in [MAX_HORIZON_YEARS + 1, 2_000_000, u32::MAX] {
            let input = ProjectionInput {
                time_horizon_years: years,
                ..sample_input()
            };
            let err = input.validate().unwrap_err();
            assert!(matches!(
                err,
                ProjectionError::Configuration { field: "time_horizon_years", .. }
            ));
        }
    }

    #[test]
    fn test_risk_adjustment_defaults_to_zero() {
        let json = r#"{
            "initial_investment": 1000.0,
            "annual_maintenance_pct": 0.1,
            "transaction_volume": 10,
            "avg_transaction_value": 5.0,
            "process_cost_per_transaction": 1.0,
            "revenue_lift_pct": 0.1,
            "cost_savings_pct": 0.1,
            "revenue_factor": 0.5,
            "savings_factor": 0.5,
            "discount_rate": 0.08,
            "time_horizon_years": 3
        }"#;
        let input: ProjectionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.risk_adjustment, 0.0);
        assert_eq!(input.transaction_volume, 10);
    }
}
