//! Plain-text rendering of projection results
//!
//! Rounding happens here and nowhere else; the engine keeps full precision.

use crate::error::ProjectionError;
use crate::projection::ProjectionResult;

/// Shown instead of a year when cumulative cash flow never turns non-negative
pub const BEYOND_HORIZON: &str = "Beyond horizon";

/// Shown instead of a ratio that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Round to whole currency units and group thousands, e.g. `-1,234,568`
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Fraction as a percentage with the given number of decimals
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Ratio metric, or `N/A` when it is undefined
pub fn format_ratio(value: &Result<f64, ProjectionError>) -> String {
    match value {
        Ok(fraction) => format_percent(*fraction, 0),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_payback_year(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("Year {}", year),
        None => BEYOND_HORIZON.to_string(),
    }
}

/// Fractional payback as years and months
pub fn format_payback_period(years: Option<f64>) -> String {
    match years {
        Some(years) => format!("{:.1} Years ({:.0} Months)", years, years * 12.0),
        None => BEYOND_HORIZON.to_string(),
    }
}

/// Key metrics block
pub fn render_summary(result: &ProjectionResult) -> String {
    let irr = result
        .irr()
        .map(|r| format_percent(r, 1))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut out = format!(
        "Net Present Value:   {}\n\
         Return on Investment: {} ({} annual)\n\
         Payback Period:      {} / {}\n\
         Total Benefits:      {} over {} years\n\
         Total Costs:         {}\n\
         Internal Rate of Return: {}\n",
        format_amount(result.npv()),
        format_ratio(&result.roi_pct()),
        format_ratio(&result.annualized_roi_pct()),
        format_payback_year(result.payback_year()),
        format_payback_period(result.payback_period_years()),
        format_amount(result.total_benefit()),
        result.time_horizon_years(),
        format_amount(result.total_cost()),
        irr,
    );

    for warning in result.warnings() {
        out.push_str(&format!("Warning: {}\n", warning));
    }

    out
}

/// Year-by-year table
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = format!(
        "{:>4} {:>14} {:>12} {:>16} {:>16} {:>16} {:>16}\n{}\n",
        "Year",
        "Investment",
        "Maintenance",
        "Benefits",
        "Net CF",
        "Cumulative CF",
        "Discounted CF",
        "-".repeat(100)
    );

    for row in result.rows() {
        out.push_str(&format!(
            "{:>4} {:>14} {:>12} {:>16} {:>16} {:>16} {:>16}\n",
            row.year,
            dash_if_zero(row.investment_cost),
            dash_if_zero(row.maintenance_cost),
            format_amount(row.gross_benefit),
            format_amount(row.net_cash_flow),
            format_amount(row.cumulative_cash_flow),
            format_amount(row.discounted_cash_flow),
        ));
    }

    out
}

fn dash_if_zero(cost: f64) -> String {
    if cost > 0.0 {
        format_amount(cost)
    } else {
        "-".to_string()
    }
}
