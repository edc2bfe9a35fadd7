//! Internal Rate of Return (IRR) over annual net cash flows

use super::discount::npv;

/// Search range for the rate; NPV has a pole at -1
const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

const START_RATE: f64 = 0.10;
const MAX_ITERATIONS: usize = 1000;

/// Bracket width at which bisection stops narrowing
const RATE_TOLERANCE: f64 = 1e-10;

/// Accepted |NPV| per unit of total absolute cash flow
const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Annual IRR of year-end cash flows (year 0 first), as a decimal.
///
/// A rate is only returned if NPV at that rate is zero within a tolerance
/// scaled to the flows. `None` when the flows never change sign or no root
/// lies in `[-0.99, 10]`.
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    let scale: f64 = cashflows.iter().map(|cf| cf.abs()).sum();
    let tolerance = scale * RESIDUAL_TOLERANCE;

    let has_inflow = cashflows.iter().any(|&cf| cf > tolerance);
    let has_outflow = cashflows.iter().any(|&cf| cf < -tolerance);
    if !has_inflow || !has_outflow {
        return None;
    }

    newton(cashflows, tolerance).or_else(|| bisect(cashflows, tolerance))
}

/// Newton-Raphson from `START_RATE`; gives up when pinned at a bound or flat
fn newton(cashflows: &[f64], tolerance: f64) -> Option<f64> {
    let mut rate = START_RATE;

    for _ in 0..MAX_ITERATIONS {
        let (value, slope) = npv_and_slope(cashflows, rate);
        if value.abs() <= tolerance {
            return Some(rate);
        }
        if slope.abs() < 1e-20 {
            return None;
        }

        let next = (rate - value / slope).clamp(MIN_RATE, MAX_RATE);
        if next == rate {
            return None;
        }
        rate = next;
    }

    None
}

fn npv_and_slope(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(value, slope), (year, &cf)| {
            let factor = (1.0 + rate).powi(year as i32);
            (
                value + cf / factor,
                slope - year as f64 * cf / (factor * (1.0 + rate)),
            )
        })
}

/// Bisection over the full search range; needs NPV to change sign across it
fn bisect(cashflows: &[f64], tolerance: f64) -> Option<f64> {
    let (mut low, mut high) = (MIN_RATE, MAX_RATE);
    let mut value_low = npv(cashflows, low);

    if value_low * npv(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (low + high);
        let value_mid = npv(cashflows, mid);

        if value_mid.abs() <= tolerance || high - low < RATE_TOLERANCE {
            return Some(mid);
        }

        if value_low * value_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            value_low = value_mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_irr() {
        // Invest 1000, get 1100 back a year later
        let irr = calculate_irr(&[-1000.0, 1100.0]).unwrap();
        assert!((irr - 0.10).abs() < 1e-6, "Expected 10% IRR, got {}", irr);
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let flows = [-500_000.0, 150_000.0, 200_000.0, 250_000.0, 250_000.0];
        let irr = calculate_irr(&flows).unwrap();
        assert!(npv(&flows, irr).abs() < 1e-4);
    }

    #[test]
    fn test_no_sign_change() {
        assert_eq!(calculate_irr(&[100.0, 200.0]), None);
        assert_eq!(calculate_irr(&[-100.0, -200.0]), None);
        assert_eq!(calculate_irr(&[]), None);
    }

    #[test]
    fn test_root_below_range_is_none() {
        // True IRR is about -99.994%, past the lower bound
        let flows = [-999_985.0, 60.0];
        assert_eq!(calculate_irr(&flows), None);
        assert_eq!(calculate_irr(&[-999_985.0, 30.0, 30.0]), None);
    }

    #[test]
    fn test_root_above_range_is_none() {
        // True IRR is 9900%
        assert_eq!(calculate_irr(&[-1.0, 100.0]), None);
    }

    #[test]
    fn test_deep_loss_found_after_newton_hits_bound() {
        // First Newton step overshoots below -0.99; bisection finds -95%
        let flows = [-1000.0, 50.0];
        let irr = calculate_irr(&flows).unwrap();
        assert!((irr + 0.95).abs() < 1e-8, "Expected -95% IRR, got {}", irr);
        assert!(npv(&flows, irr).abs() < 1e-3);
    }

    #[test]
    fn test_returned_rate_is_always_a_root() {
        let cases: [&[f64]; 5] = [
            &[-1000.0, 0.0, 0.0, 0.0, 0.0, 5000.0],
            &[-1000.0, 50.0],
            &[-100.0, 1000.0],
            &[-380_000.0, 25_000.0, 90_000.0, 120_000.0, 160_000.0],
            &[-10.0, 2.0, 2.0, 2.0],
        ];
        for flows in cases {
            let scale: f64 = flows.iter().map(|cf| cf.abs()).sum();
            let irr = calculate_irr(flows).unwrap();
            assert!(
                npv(flows, irr).abs() <= scale * 1e-6,
                "flows {:?} gave {} with NPV {}",
                flows,
                irr,
                npv(flows, irr)
            );
        }
    }
}
