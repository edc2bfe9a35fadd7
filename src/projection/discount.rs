//! Annual discounting for NPV and IRR

/// Present value of `amount` received at the end of `year` at an annual `rate`
///
/// Year 0 is undiscounted, and a zero rate leaves every amount unchanged.
pub fn discount(amount: f64, rate: f64, year: u32) -> f64 {
    amount / (1.0 + rate).powi(year as i32)
}

/// Net present value of a stream of annual flows, the first one at year 0
pub fn npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(year, &cf)| discount(cf, rate, year as u32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_identity() {
        for year in 0..8 {
            assert_eq!(discount(1234.5, 0.0, year), 1234.5);
        }
    }

    #[test]
    fn test_discount_factors() {
        assert_eq!(discount(100.0, 0.08, 0), 100.0);
        assert_relative_eq!(discount(108.0, 0.08, 1), 100.0, max_relative = 1e-12);
        assert_relative_eq!(discount(100.0, 0.10, 3), 100.0 / 1.331, max_relative = 1e-12);
    }

    #[test]
    fn test_npv() {
        // -1000 today, 1100 in a year, at 10%: break-even
        assert_relative_eq!(npv(&[-1000.0, 1100.0], 0.10), 0.0, epsilon = 1e-9);
        assert_relative_eq!(npv(&[-100.0, 50.0, 50.0], 0.0), 0.0, epsilon = 1e-12);
    }
}
