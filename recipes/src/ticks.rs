//! Base-10 logarithmic tick values
//!
//! Enumerates the canonical tick positions of a log axis (`mantissa * 10^exponent`) that
//! fall inside a closed interval. This lets minor ticks be restricted to a chosen
//! sub-range independently of the axis view limits.

use itertools::Itertools;
use tracing::debug;

/// Mantissas of the usual log-axis minor ticks
pub const DEFAULT_COMB: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Relative distance from a bound within which a tick still counts as inside
pub const LOG_TICK_REL_TOLERANCE: f64 = 1e-9;

/// All values `c * 10^e` (`c` from `comb`) lying in `[min, max]`
///
/// The bounds may be given in either order. Ticks in the first and last decade are
/// filtered against the bounds with a small relative tolerance
/// ([`LOG_TICK_REL_TOLERANCE`]); decades strictly between them are included whole. The
/// result is ascending without duplicates. Bounds that are not finite and positive give
/// an empty vector.
///
/// ```rust
/// use plot_recipes::{DEFAULT_COMB, log_ticks_base10};
///
/// let ticks = log_ticks_base10(3.0e2, 2.0e3, &DEFAULT_COMB);
/// assert_eq!(ticks, vec![300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0, 2000.0]);
///
/// assert!(log_ticks_base10(1.01e-1, 1.02e-1, &DEFAULT_COMB).is_empty());
/// ```
pub fn log_ticks_base10(min: f64, max: f64, comb: &[u32]) -> Vec<f64> {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    if !(min.is_finite() && max.is_finite()) || min <= 0.0 {
        debug!(
            "no log ticks for [{}, {}]: bounds must be finite and positive",
            min, max
        );
        return Vec::new();
    }

    let comb: Vec<u32> = comb.iter().copied().filter(|&c| c > 0).sorted().dedup().collect();
    let lower = min * (1.0 - LOG_TICK_REL_TOLERANCE);
    // Widening f64::MAX would overflow to infinity
    let upper = (max * (1.0 + LOG_TICK_REL_TOLERANCE)).min(f64::MAX);
    // From the widened bounds, so a max just below 10^k still reaches decade k
    let exp_min = lower.log10().floor() as i32;
    let exp_max = upper.log10().floor() as i32;

    let mut ticks: Vec<f64> = (exp_min..=exp_max)
        .flat_map(|exp| {
            comb.iter()
                .map(move |&c| decade_value(c, exp))
                .filter(move |&v| {
                    v > 0.0
                        && v.is_finite()
                        && (exp != exp_min || v >= lower)
                        && (exp != exp_max || v <= upper)
                })
        })
        .collect();

    // Mantissas of 10 or more reach into the next decade
    ticks.sort_by(f64::total_cmp);
    ticks.dedup();
    ticks
}

/// Decade ticks (`10^e`) in `[min, max]`
pub fn major_log_ticks(min: f64, max: f64) -> Vec<f64> {
    log_ticks_base10(min, max, &[1])
}

/// Ticks for every mantissa 1..=9 in `[min, max]`
pub fn minor_log_ticks(min: f64, max: f64) -> Vec<f64> {
    log_ticks_base10(min, max, &DEFAULT_COMB)
}

/// `mantissa * 10^exp`, dividing for negative exponents so `3 * 10^-1` is exactly `0.3`
///
/// Values above `f64::MAX` come out infinite and values below the smallest subnormal
/// come out zero.
fn decade_value(mantissa: u32, exp: i32) -> f64 {
    let mantissa = f64::from(mantissa);
    if exp < -f64::MAX_10_EXP {
        // 10^-exp itself is not representable; divide in two steps
        mantissa / 10f64.powi(-exp - f64::MAX_10_EXP) / 10f64.powi(f64::MAX_10_EXP)
    } else if exp < 0 {
        mantissa / 10f64.powi(-exp)
    } else {
        mantissa * 10f64.powi(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_multi_decade() {
        let ticks = log_ticks_base10(3.0e2, 8.0e4, &DEFAULT_COMB);
        let mut expected = Vec::new();
        expected.extend((3..=9).map(|c| c as f64 * 1e2));
        expected.extend((1..=9).map(|c| c as f64 * 1e3));
        expected.extend((1..=8).map(|c| c as f64 * 1e4));
        assert_eq!(ticks.len(), 24);
        assert_eq!(ticks, expected);
    }

    #[test]
    fn test_sub_decade_without_ticks_is_empty() {
        assert!(log_ticks_base10(1.01e-1, 1.02e-1, &DEFAULT_COMB).is_empty());
    }

    #[test]
    fn test_bounds_on_a_single_tick() {
        assert_eq!(log_ticks_base10(2.0e3, 2.0e3, &DEFAULT_COMB), vec![2.0e3]);
        assert_eq!(log_ticks_base10(0.3, 0.3, &DEFAULT_COMB), vec![0.3]);
    }

    #[test]
    fn test_swapped_bounds() {
        assert_eq!(
            log_ticks_base10(8.0e4, 3.0e2, &DEFAULT_COMB),
            log_ticks_base10(3.0e2, 8.0e4, &DEFAULT_COMB)
        );
    }

    #[test]
    fn test_same_decade_filters_both_ends() {
        assert_eq!(
            log_ticks_base10(2.5, 6.0, &DEFAULT_COMB),
            vec![3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_tolerant_boundaries() {
        // Just inside the tolerance of 500 and 2000
        let ticks = log_ticks_base10(500.0 * (1.0 + 1e-12), 2000.0 * (1.0 - 1e-12), &DEFAULT_COMB);
        assert_eq!(ticks.first(), Some(&500.0));
        assert_eq!(ticks.last(), Some(&2000.0));

        // Clearly outside
        let ticks = log_ticks_base10(500.0 * (1.0 + 1e-6), 2000.0 * (1.0 - 1e-6), &DEFAULT_COMB);
        assert_eq!(ticks.first(), Some(&600.0));
        assert_eq!(ticks.last(), Some(&1000.0));
    }

    #[test]
    fn test_custom_comb_is_normalised() {
        assert_eq!(
            log_ticks_base10(1.0, 100.0, &[5, 0, 2, 1, 2]),
            vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0]
        );
    }

    #[test]
    fn test_large_mantissas_do_not_duplicate() {
        let ticks = log_ticks_base10(1.0, 1000.0, &[1, 10]);
        assert_eq!(ticks, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_invalid_bounds_are_empty() {
        assert!(log_ticks_base10(0.0, 10.0, &DEFAULT_COMB).is_empty());
        assert!(log_ticks_base10(-5.0, 10.0, &DEFAULT_COMB).is_empty());
        assert!(log_ticks_base10(1.0, f64::INFINITY, &DEFAULT_COMB).is_empty());
        assert!(log_ticks_base10(f64::NAN, 10.0, &DEFAULT_COMB).is_empty());
        assert!(log_ticks_base10(1.0, 10.0, &[]).is_empty());
    }

    #[test]
    fn test_bounds_at_the_edges_of_f64() {
        let ticks = log_ticks_base10(1.0, f64::MAX, &DEFAULT_COMB);
        // 2e308..9e308 overflow, so the top decade only keeps 1e308
        assert_eq!(ticks.len(), 308 * 9 + 1);
        assert!(ticks.iter().all(|t| t.is_finite()));
        assert_relative_eq!(*ticks.last().unwrap(), 1.0e308, max_relative = 1e-12);

        let majors = major_log_ticks(f64::MAX, f64::MAX / 2.0);
        assert_eq!(majors.len(), 1);

        let tiny = log_ticks_base10(f64::MIN_POSITIVE / 100.0, 1.0e-300, &[1]);
        assert_eq!(tiny.len(), 10);
        assert!(tiny.iter().all(|t| *t > 0.0));
        assert!(tiny.windows(2).all(|w| w[0] < w[1]));

        let ticks = log_ticks_base10(5.0e-324, 1.0e-320, &DEFAULT_COMB);
        assert!(ticks.iter().all(|t| *t > 0.0));
    }

    #[test]
    fn test_major_and_minor_helpers() {
        assert_eq!(major_log_ticks(0.5, 2000.0), vec![1.0, 10.0, 100.0, 1000.0]);
        let minor = minor_log_ticks(1.0e-3, 1.0e-2);
        assert_eq!(minor.len(), 10);
        assert_eq!(minor[0], 1.0e-3);
        assert_eq!(minor[9], 1.0e-2);
    }
}
