//! Axis padding
//!
//! Pads a data interval symmetrically so plotted data sits inset from the axes. On a
//! linear axis the padding is a fraction of the data width; on a log axis it is a
//! fraction of the number of decades spanned, so the margin looks the same on screen.
//!
//! None of these functions validate their input. A zero-width interval comes back
//! unchanged, negative fractions shrink the interval, and non-positive bounds on a log
//! axis produce NaN.

use crate::Interval;
use crate::scale::ScaleType;
use itertools::{Itertools, MinMaxResult};

/// Pad `[xmin_data, xmax_data]` by `padding_fraction` of its width on each side
///
/// ```rust
/// use plot_recipes::linear_axis_padding;
///
/// let (xmin, xmax) = linear_axis_padding(0.0, 2.0, 0.05);
/// assert!((xmin - -0.1).abs() < 1e-12);
/// assert!((xmax - 2.1).abs() < 1e-12);
/// ```
pub fn linear_axis_padding(xmin_data: f64, xmax_data: f64, padding_fraction: f64) -> Interval {
    let width = xmax_data - xmin_data;
    let xmin = xmin_data - width * padding_fraction;
    let xmax = xmax_data + width * padding_fraction;
    (xmin, xmax)
}

/// Pad `[xmin_data, xmax_data]` by `padding_fraction` of its decade span on each side
///
/// Both bounds must be positive for a meaningful result.
///
/// ```rust
/// use plot_recipes::log_axis_padding;
///
/// // One decade, padded by 10% of a decade on each side
/// let (xmin, xmax) = log_axis_padding(1.0, 10.0, 0.1);
/// assert!((xmin.log10() - -0.1).abs() < 1e-12);
/// assert!((xmax.log10() - 1.1).abs() < 1e-12);
/// ```
pub fn log_axis_padding(xmin_data: f64, xmax_data: f64, padding_fraction: f64) -> Interval {
    let decades = (xmax_data / xmin_data).log10();
    let xmin = xmin_data * 10f64.powf(-padding_fraction * decades);
    let xmax = xmax_data * 10f64.powf(padding_fraction * decades);
    (xmin, xmax)
}

/// Pad an interval for the given axis scale
pub fn axis_padding(
    scale: ScaleType,
    xmin_data: f64,
    xmax_data: f64,
    padding_fraction: f64,
) -> Interval {
    match scale {
        ScaleType::Linear => linear_axis_padding(xmin_data, xmax_data, padding_fraction),
        ScaleType::Log => log_axis_padding(xmin_data, xmax_data, padding_fraction),
    }
}

/// Minimum and maximum of the finite values in `values`
///
/// Returns `None` when there are no finite values. A single finite value gives a
/// zero-width interval.
pub fn data_limits(values: &[f64]) -> Option<Interval> {
    match values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Data limits of `values`, padded for the given axis scale
///
/// On a log axis only positive values are considered, since nothing else can be shown.
pub fn padded_limits(values: &[f64], scale: ScaleType, padding_fraction: f64) -> Option<Interval> {
    let limits = match scale {
        ScaleType::Linear => data_limits(values),
        ScaleType::Log => {
            let positive: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
            data_limits(&positive)
        }
    };

    let Some((min, max)) = limits else {
        tracing::debug!("no plottable values for a {} axis, nothing to pad", scale);
        return None;
    };

    Some(axis_padding(scale, min, max, padding_fraction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_padding_reference_case() {
        let (xmin, xmax) = linear_axis_padding(0.0, 2.0, 0.05);
        assert_relative_eq!(xmin, -0.1);
        assert_relative_eq!(xmax, 2.1);
    }

    #[test]
    fn test_linear_padding_zero_width_is_unchanged() {
        assert_eq!(linear_axis_padding(3.0, 3.0, 0.5), (3.0, 3.0));
    }

    #[test]
    fn test_linear_padding_negative_fraction_shrinks() {
        let (xmin, xmax) = linear_axis_padding(0.0, 10.0, -0.1);
        assert_relative_eq!(xmin, 1.0);
        assert_relative_eq!(xmax, 9.0);
    }

    #[test]
    fn test_log_padding_reference_case() {
        let (xmin, xmax) = log_axis_padding(1.0e-11, 1.0e-9, 0.04);
        assert_relative_eq!(xmin, 8.317637711026709e-12, max_relative = 1e-12);
        assert_relative_eq!(xmax, 1.202264434617413e-09, max_relative = 1e-12);
    }

    #[test]
    fn test_log_padding_non_positive_propagates_nan() {
        let (xmin, xmax) = log_axis_padding(-1.0, 10.0, 0.1);
        assert!(xmin.is_nan());
        assert!(xmax.is_nan());
    }

    #[test]
    fn test_axis_padding_dispatches_on_scale() {
        assert_eq!(
            axis_padding(ScaleType::Linear, 0.0, 2.0, 0.05),
            linear_axis_padding(0.0, 2.0, 0.05)
        );
        assert_eq!(
            axis_padding(ScaleType::Log, 1.0, 100.0, 0.05),
            log_axis_padding(1.0, 100.0, 0.05)
        );
    }

    #[test]
    fn test_data_limits_skips_non_finite() {
        let values = [f64::NAN, 4.0, -2.0, f64::INFINITY, 7.5];
        assert_eq!(data_limits(&values), Some((-2.0, 7.5)));
        assert_eq!(data_limits(&[1.5]), Some((1.5, 1.5)));
        assert_eq!(data_limits(&[f64::NAN]), None);
        assert_eq!(data_limits(&[]), None);
    }

    #[test]
    fn test_padded_limits_log_ignores_non_positive() {
        let values = [0.0, -3.0, 10.0, 1000.0];
        let (xmin, xmax) = padded_limits(&values, ScaleType::Log, 0.5).unwrap();
        assert_relative_eq!(xmin, 1.0, max_relative = 1e-12);
        assert_relative_eq!(xmax, 10_000.0, max_relative = 1e-12);
        assert_eq!(padded_limits(&[-1.0, 0.0], ScaleType::Log, 0.1), None);
    }
}
