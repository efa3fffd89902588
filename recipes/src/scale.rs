use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Axis scaling used by the padding, box-coordinate and axis-format helpers
///
/// Every helper that behaves differently on a logarithmic axis takes a `ScaleType`
/// instead of a free-form string, so a misspelled scale can only fail where text is
/// parsed (see [`ScaleType::parse`]).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ScaleType {
    /// Values are spaced evenly in data units
    #[default]
    #[strum(serialize = "linear")]
    Linear,
    /// Values are spaced evenly in base-10 decades
    #[serde(alias = "logarithmic")]
    #[strum(to_string = "log", serialize = "logarithmic")]
    Log,
}

impl ScaleType {
    /// Parse a scale name such as `"linear"`, `"log"` or `"logarithmic"` (case-insensitive)
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| RecipeError::UnknownScale(name.to_string()))
    }

    /// Map a data value into the space where this scale is uniform
    ///
    /// Identity for linear axes, `log10` for log axes. Non-positive values on a log axis
    /// come back as NaN or `-inf`, exactly as `f64::log10` produces them.
    pub fn to_uniform(self, value: f64) -> f64 {
        match self {
            ScaleType::Linear => value,
            ScaleType::Log => value.log10(),
        }
    }

    /// Inverse of [`ScaleType::to_uniform`]
    pub fn from_uniform(self, value: f64) -> f64 {
        match self {
            ScaleType::Linear => value,
            ScaleType::Log => 10f64.powf(value),
        }
    }

    pub fn is_log(self) -> bool {
        matches!(self, ScaleType::Log)
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included
///
/// Values are computed from their index, so the last value is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` values spaced evenly in decades, from `10^start_exp` to `10^stop_exp`
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, n)
        .into_iter()
        .map(|exp| 10f64.powf(exp))
        .collect()
}
