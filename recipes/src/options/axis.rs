use crate::error::{RecipeError, Result};
use crate::padding::axis_padding;
use crate::scale::ScaleType;
use crate::ticks::{DEFAULT_COMB, log_ticks_base10, major_log_ticks};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Rough number of major ticks [`AxisFormat::from_data`] aims for on a linear axis
pub const TARGET_MAJOR_TICKS: f64 = 5.0;

/// Largest number of ticks a single run of major or minor ticks may hold
pub const MAX_TICKS: f64 = 10_000.0;

/// Relative slack used when stepping ticks up to an end value
const STEP_TOLERANCE: f64 = 1e-9;

/// Format of a single plot axis: visible limits, major/minor tick layout and label
///
/// On a linear axis, major ticks run from `major_tick_start` to `major_tick_end` every
/// `major_step`, and minor ticks fill `[min, max]` every `minor_step`. On a log axis,
/// major ticks are the decades between `major_tick_start` and `major_tick_end` (every
/// `major_step` decades) and minor ticks are the 1..9 mantissas inside `[min, max]`.
///
/// # Example
///
/// ```rust
/// use plot_recipes::options::AxisFormat;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let axis = AxisFormat::new()
///     .min(-0.5)
///     .max(10.5)
///     .major_tick_start(0.0)
///     .major_tick_end(10.0)
///     .major_step(2.0)
///     .minor_step(1.0)
///     .label("time (s)")
///     .build()?;
///
/// assert_eq!(axis.major_ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(private, name = "build_unchecked", error = "RecipeError")
)]
pub struct AxisFormat {
    /// Lower visible limit
    #[builder(default = "0.0")]
    pub min: f64,

    /// Upper visible limit
    #[builder(default = "1.0")]
    pub max: f64,

    /// First major tick
    #[builder(default = "0.0")]
    pub major_tick_start: f64,

    /// Last major tick (inclusive)
    #[builder(default = "1.0")]
    pub major_tick_end: f64,

    /// Distance between major ticks (data units, or decades on a log axis)
    #[builder(default = "0.2")]
    pub major_step: f64,

    /// Distance between minor ticks on a linear axis
    pub minor_step: Option<f64>,

    /// Optional axis label
    pub label: Option<String>,

    /// Axis scaling
    pub scale: ScaleType,
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            major_tick_start: 0.0,
            major_tick_end: 1.0,
            major_step: 0.2,
            minor_step: None,
            label: None,
            scale: ScaleType::Linear,
        }
    }
}

impl AxisFormatBuilder {
    /// Build the format, checking limits and steps
    pub fn build(&self) -> Result<AxisFormat> {
        let format = self.build_unchecked()?;
        format.validate()?;
        Ok(format)
    }
}

impl AxisFormat {
    /// Create a new builder for AxisFormat
    pub fn new() -> AxisFormatBuilder {
        AxisFormatBuilder::default()
    }

    /// Format an axis around a data range
    ///
    /// The range is padded by `padding_fraction` for the given scale. Linear axes get
    /// "nice" major ticks (1, 2 or 5 times a power of ten) and matching minor ticks; log
    /// axes get decade majors. A zero-width range is widened to one unit (linear) or one
    /// decade (log) first.
    pub fn from_data(
        data_min: f64,
        data_max: f64,
        padding_fraction: f64,
        scale: ScaleType,
    ) -> Result<Self> {
        let (data_min, data_max) = if data_min > data_max {
            (data_max, data_min)
        } else {
            (data_min, data_max)
        };
        let (data_min, data_max) = widen_degenerate(data_min, data_max, scale);
        let (min, max) = axis_padding(scale, data_min, data_max, padding_fraction);

        let format = match scale {
            ScaleType::Linear => {
                let major_step = nice_step((max - min) / TARGET_MAJOR_TICKS);
                AxisFormat {
                    min,
                    max,
                    major_tick_start: (min / major_step).ceil() * major_step,
                    major_tick_end: (max / major_step).floor() * major_step,
                    major_step,
                    minor_step: Some(minor_step_for(major_step)),
                    label: None,
                    scale,
                }
            }
            ScaleType::Log => AxisFormat {
                min,
                max,
                major_tick_start: 10f64.powf(min.log10().ceil()),
                major_tick_end: 10f64.powf(max.log10().floor()),
                major_step: 1.0,
                minor_step: None,
                label: None,
                scale,
            },
        };

        format.validate()?;
        debug!(
            "formatted {} axis [{}, {}] from data [{}, {}]",
            scale, format.min, format.max, data_min, data_max
        );
        Ok(format)
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Visible limits as `(min, max)`
    pub fn limits(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Check limits and steps
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(RecipeError::invalid_format(format!(
                "limits must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(RecipeError::invalid_format(format!(
                "min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        if self.scale.is_log() && self.min <= 0.0 {
            return Err(RecipeError::invalid_format(format!(
                "log axis limits must be positive, got min {}",
                self.min
            )));
        }
        if !(self.major_step.is_finite() && self.major_step > 0.0) {
            return Err(RecipeError::invalid_format(format!(
                "major step must be positive, got {}",
                self.major_step
            )));
        }
        if !(self.major_tick_start.is_finite() && self.major_tick_end.is_finite()) {
            return Err(RecipeError::invalid_format(format!(
                "major tick range must be finite, got [{}, {}]",
                self.major_tick_start, self.major_tick_end
            )));
        }
        if let Some(minor) = self.minor_step {
            if !(minor.is_finite() && minor > 0.0) {
                return Err(RecipeError::invalid_format(format!(
                    "minor step must be positive, got {}",
                    minor
                )));
            }
        }
        if self.scale == ScaleType::Linear {
            check_tick_count(
                "major",
                self.major_tick_start,
                self.major_tick_end,
                self.major_step,
            )?;
            if let Some(minor) = self.minor_step {
                check_tick_count("minor", self.min, self.max, minor)?;
            }
        }
        Ok(())
    }

    /// Major tick positions, ascending
    ///
    /// Empty if `major_tick_start` lies beyond `major_tick_end`.
    pub fn major_ticks(&self) -> Vec<f64> {
        match self.scale {
            ScaleType::Linear => {
                stepped(self.major_tick_start, self.major_tick_end, self.major_step)
            }
            ScaleType::Log => {
                let stride = (self.major_step.round() as i32).max(1);
                major_log_ticks(self.major_tick_start, self.major_tick_end)
                    .into_iter()
                    .filter(|tick| (tick.log10().round() as i32).rem_euclid(stride) == 0)
                    .collect()
            }
        }
    }

    /// Minor tick positions inside `[min, max]`, excluding major tick positions
    pub fn minor_ticks(&self) -> Vec<f64> {
        let majors = self.major_ticks();
        let candidates = match self.scale {
            ScaleType::Linear => {
                let Some(step) = self.minor_step else {
                    return Vec::new();
                };
                let first = (self.min / step - STEP_TOLERANCE).ceil() * step;
                stepped(first, self.max, step)
            }
            ScaleType::Log => log_ticks_base10(self.min, self.max, &DEFAULT_COMB),
        };

        candidates
            .into_iter()
            .filter(|tick| {
                !majors
                    .iter()
                    .any(|major| (major - tick).abs() <= tick.abs().max(major.abs()) * 1e-9)
            })
            .collect()
    }
}

/// `start, start + step, ...` up to `end` (inclusive, with a little slack)
///
/// Values are computed from their index, and values within rounding of zero are
/// snapped to zero.
fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    if start > end + step * STEP_TOLERANCE {
        return Vec::new();
    }
    let count = ((end - start) / step + STEP_TOLERANCE).floor();
    if !(count.is_finite() && count < MAX_TICKS) {
        warn!(
            "skipping ticks from {} to {} every {}: too many ticks",
            start, end, step
        );
        return Vec::new();
    }
    (0..=count as usize)
        .map(|i| {
            let value = start + step * i as f64;
            if value.abs() < step * STEP_TOLERANCE { 0.0 } else { value }
        })
        .collect()
}

fn check_tick_count(kind: &str, start: f64, end: f64, step: f64) -> Result<()> {
    let count = (end - start) / step;
    if !(count.is_finite() && count < MAX_TICKS) {
        return Err(RecipeError::invalid_format(format!(
            "{} step {} gives more than {} ticks over [{}, {}]",
            kind, step, MAX_TICKS, start, end
        )));
    }
    Ok(())
}

/// Smallest of 1, 2, 5 or 10 times a power of ten that is at least `raw_step`
fn nice_step(raw_step: f64) -> f64 {
    let raw_step = raw_step.abs();
    if raw_step == 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let factor = 10f64.powf(raw_step.log10().floor());
    let mantissa = raw_step / factor;
    let nice = if mantissa <= 1.0 {
        1.0
    } else if mantissa <= 2.0 {
        2.0
    } else if mantissa <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * factor
}

/// Minor step for a nice major step: quarters of a 2, fifths of a 1 or 5
fn minor_step_for(major_step: f64) -> f64 {
    let mantissa = major_step / 10f64.powf(major_step.log10().floor());
    if (mantissa - 2.0).abs() < 1e-6 {
        major_step / 4.0
    } else {
        major_step / 5.0
    }
}

fn widen_degenerate(min: f64, max: f64, scale: ScaleType) -> (f64, f64) {
    if min != max {
        return (min, max);
    }
    match scale {
        ScaleType::Linear => (min - 0.5, min + 0.5),
        ScaleType::Log => {
            let half_decade = 10f64.sqrt();
            (min / half_decade, min * half_decade)
        }
    }
}
