//! Load named projection scenarios from CSV

use super::{NamedInput, ProjectionInput};
use crate::error::LoadError;
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Raw CSV row; columns follow the `ProjectionInput` field names
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario: String,
    initial_investment: f64,
    annual_maintenance_pct: f64,
    transaction_volume: u64,
    avg_transaction_value: f64,
    process_cost_per_transaction: f64,
    revenue_lift_pct: f64,
    cost_savings_pct: f64,
    revenue_factor: f64,
    savings_factor: f64,
    discount_rate: f64,
    #[serde(default)]
    risk_adjustment: f64,
    time_horizon_years: u32,
}

impl CsvRow {
    fn into_named(self) -> NamedInput {
        NamedInput {
            name: self.scenario,
            input: ProjectionInput {
                initial_investment: self.initial_investment,
                annual_maintenance_pct: self.annual_maintenance_pct,
                transaction_volume: self.transaction_volume,
                avg_transaction_value: self.avg_transaction_value,
                process_cost_per_transaction: self.process_cost_per_transaction,
                revenue_lift_pct: self.revenue_lift_pct,
                cost_savings_pct: self.cost_savings_pct,
                revenue_factor: self.revenue_factor,
                savings_factor: self.savings_factor,
                discount_rate: self.discount_rate,
                risk_adjustment: self.risk_adjustment,
                time_horizon_years: self.time_horizon_years,
            },
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedInput>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
///
/// Every row is range-checked; the first invalid row fails the whole load.
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedInput>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let named = row.into_named();
        named
            .input
            .validate()
            .map_err(|source| LoadError::InvalidRow { row: idx + 1, source })?;
        scenarios.push(named);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "scenario,initial_investment,annual_maintenance_pct,transaction_volume,\
avg_transaction_value,process_cost_per_transaction,revenue_lift_pct,cost_savings_pct,\
revenue_factor,savings_factor,discount_rate,risk_adjustment,time_horizon_years\n";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}base,500000,0.2,100000,1000,50,0.2,0.25,0.65,0.35,0.08,0,5\n\
             cautious,500000,0.2,100000,1000,50,0.2,0.25,0.65,0.35,0.10,0.3,7\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].input.transaction_volume, 100_000);
        assert_eq!(scenarios[1].name, "cautious");
        assert_eq!(scenarios[1].input.time_horizon_years, 7);
        assert!((scenarios[1].input.risk_adjustment - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = format!(
            "{}ok,1000,0.2,10,10,1,0.1,0.1,0.5,0.5,0.08,0,3\n\
             broken,-1000,0.2,10,10,1,0.1,0.1,0.5,0.5,0.08,0,3\n",
            HEADER
        );
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert!(source.is_configuration());
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_sample_file() {
        let scenarios = load_scenarios("data/scenarios/sample_scenarios.csv")
            .expect("Failed to load sample scenarios");
        assert_eq!(scenarios.len(), 4);
        assert_eq!(scenarios[0].name, "reference");
        assert_eq!(scenarios[3].input.time_horizon_years, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenarios("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
