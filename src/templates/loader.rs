//! CSV-based template loader
//!
//! Loads business-process presets from use_case_templates.csv

use super::{TemplateSet, UseCaseTemplate};
use crate::error::LoadError;
use std::fs::File;
use std::path::Path;

/// Default path to the templates directory
pub const DEFAULT_TEMPLATES_PATH: &str = "data/templates";

/// File name looked up inside a templates directory
pub const TEMPLATES_FILE: &str = "use_case_templates.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    key: String,
    name: String,
    description: String,
    base_volume: u64,
    base_value: f64,
    process_cost: f64,
    revenue_factor: f64,
    savings_factor: f64,
    default_revenue_lift: f64,
    default_cost_savings: f64,
    default_investment: f64,
    default_maintenance_pct: f64,
    impact_category_1: String,
    impact_category_2: String,
    impact_category_3: String,
}

impl From<CsvRow> for UseCaseTemplate {
    fn from(row: CsvRow) -> Self {
        UseCaseTemplate {
            key: row.key,
            name: row.name,
            description: row.description,
            base_volume: row.base_volume,
            base_value: row.base_value,
            process_cost: row.process_cost,
            revenue_factor: row.revenue_factor,
            savings_factor: row.savings_factor,
            default_revenue_lift: row.default_revenue_lift,
            default_cost_savings: row.default_cost_savings,
            default_investment: row.default_investment,
            default_maintenance_pct: row.default_maintenance_pct,
            impact_categories: [row.impact_category_1, row.impact_category_2, row.impact_category_3],
        }
    }
}

/// Load presets from `use_case_templates.csv` in a directory
pub fn load_templates(dir: &Path) -> Result<TemplateSet, LoadError> {
    let path = dir.join(TEMPLATES_FILE);
    let file = File::open(&path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_templates_from_reader(file)
}

/// Load presets from any reader
///
/// Each preset's defaults must form a valid projection input.
pub fn load_templates_from_reader<R: std::io::Read>(reader: R) -> Result<TemplateSet, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut templates = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let template = UseCaseTemplate::from(row);
        template
            .to_input()
            .validate()
            .map_err(|source| LoadError::InvalidRow { row: idx + 1, source })?;
        templates.push(template);
    }

    log::debug!("Loaded {} use case templates", templates.len());
    Ok(TemplateSet::new(templates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "key,name,description,base_volume,base_value,process_cost,\
revenue_factor,savings_factor,default_revenue_lift,default_cost_savings,default_investment,\
default_maintenance_pct,impact_category_1,impact_category_2,impact_category_3\n";

    #[test]
    fn test_load_templates_from_reader() {
        let data = format!(
            "{}payroll,Payroll Processing,\"Automate payroll checks, approvals\",20000,3000,30,0.3,0.7,0.05,0.4,200000,0.15,Accuracy,Speed,Audit\n",
            HEADER
        );
        let set = load_templates_from_reader(data.as_bytes()).unwrap();

        assert_eq!(set.len(), 1);
        let payroll = set.get("payroll").unwrap();
        assert_eq!(payroll.description, "Automate payroll checks, approvals");
        assert_eq!(payroll.base_volume, 20_000);
        assert_eq!(payroll.impact_categories, ["Accuracy", "Speed", "Audit"].map(String::from));
    }

    #[test]
    fn test_default_file_matches_builtin() {
        let set = load_templates(Path::new(DEFAULT_TEMPLATES_PATH)).expect("Failed to load templates");
        assert_eq!(set, TemplateSet::builtin());
    }

    #[test]
    fn test_invalid_template_rejected() {
        let data = format!(
            "{}bad,Bad,Bad,10,10,1,1.5,0.5,0.1,0.1,1000,0.1,A,B,C\n",
            HEADER
        );
        let err = load_templates_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn test_load_templates_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join(TEMPLATES_FILE)).unwrap();
        writeln!(
            file,
            "{}ops,Ops,Ops desk,1000,50,5,0.5,0.5,0.1,0.2,10000,0.2,X,Y,Z",
            HEADER
        )
        .unwrap();

        let set = load_templates(dir.path()).unwrap();
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["ops"]);

        let missing = load_templates(&dir.path().join("nowhere")).unwrap_err();
        assert!(matches!(missing, LoadError::Io { .. }));
    }
}
