use crate::error::{RecipeError, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const CM_PER_INCH: f64 = 2.54;

/// Figure size and axes margins, in centimetres
///
/// Plotting libraries usually take the figure size in inches and the axes position as
/// fractions of the figure. Describing both in centimetres keeps the margins fixed when
/// the figure is resized.
///
/// # Example
///
/// ```rust
/// use plot_recipes::options::FigureLayout;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let layout = FigureLayout::new()
///     .width_cm(10.0)
///     .height_cm(5.0)
///     .margin_left_cm(2.0)
///     .margin_right_cm(0.5)
///     .margin_bottom_cm(1.0)
///     .margin_top_cm(0.5)
///     .build()?;
///
/// let rect = layout.axes_rect()?;
/// assert!((rect.left - 0.2).abs() < 1e-12);
/// assert!((rect.width - 0.75).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into), default, build_fn(error = "RecipeError"))]
pub struct FigureLayout {
    /// Figure width
    #[builder(default = "8.0")]
    pub width_cm: f64,

    /// Figure height
    #[builder(default = "6.0")]
    pub height_cm: f64,

    /// Space left of the axes (tick labels and y label)
    #[builder(default = "1.5")]
    pub margin_left_cm: f64,

    /// Space right of the axes
    #[builder(default = "0.5")]
    pub margin_right_cm: f64,

    /// Space below the axes (tick labels and x label)
    #[builder(default = "1.2")]
    pub margin_bottom_cm: f64,

    /// Space above the axes
    #[builder(default = "0.4")]
    pub margin_top_cm: f64,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            width_cm: 8.0,
            height_cm: 6.0,
            margin_left_cm: 1.5,
            margin_right_cm: 0.5,
            margin_bottom_cm: 1.2,
            margin_top_cm: 0.4,
        }
    }
}

/// Figure size in inches
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

/// Axes rectangle as fractions of the figure, measured from the bottom-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxesRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl AxesRect {
    /// `[left, bottom, width, height]`, the order figure APIs usually expect
    pub fn to_array(self) -> [f64; 4] {
        [self.left, self.bottom, self.width, self.height]
    }
}

impl FigureLayout {
    /// Create a new builder for FigureLayout
    pub fn new() -> FigureLayoutBuilder {
        FigureLayoutBuilder::default()
    }

    /// Set all four margins at once (left, right, bottom, top)
    pub fn with_margins_cm(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.margin_left_cm = left;
        self.margin_right_cm = right;
        self.margin_bottom_cm = bottom;
        self.margin_top_cm = top;
        self
    }

    pub fn figure_size(&self) -> FigureSize {
        FigureSize {
            width_in: self.width_cm / CM_PER_INCH,
            height_in: self.height_cm / CM_PER_INCH,
        }
    }

    /// Height over width
    pub fn aspect_ratio(&self) -> f64 {
        self.height_cm / self.width_cm
    }

    /// Position of the axes inside the figure
    ///
    /// Fails if the figure size is not positive, a margin is negative, or the margins
    /// leave no room for the axes.
    pub fn axes_rect(&self) -> Result<AxesRect> {
        let (w, h) = (self.width_cm, self.height_cm);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(RecipeError::invalid_layout(format!(
                "figure size must be positive, got {} x {} cm",
                w, h
            )));
        }

        let margins = [
            self.margin_left_cm,
            self.margin_right_cm,
            self.margin_bottom_cm,
            self.margin_top_cm,
        ];
        if margins.iter().any(|m| !(m.is_finite() && *m >= 0.0)) {
            return Err(RecipeError::invalid_layout(format!(
                "margins must be non-negative, got {:?} cm",
                margins
            )));
        }

        let axes_w = w - self.margin_left_cm - self.margin_right_cm;
        let axes_h = h - self.margin_bottom_cm - self.margin_top_cm;
        if axes_w <= 0.0 || axes_h <= 0.0 {
            return Err(RecipeError::invalid_layout(format!(
                "margins leave no room for the axes in a {} x {} cm figure",
                w, h
            )));
        }

        Ok(AxesRect {
            left: self.margin_left_cm / w,
            bottom: self.margin_bottom_cm / h,
            width: axes_w / w,
            height: axes_h / h,
        })
    }
}
