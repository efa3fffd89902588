//! # plot-recipes
//!
//! Numeric helpers behind a collection of plotting recipes.
//!
//! ## Overview
//!
//! Every helper here is a pure function (or an immutable record) over plain numbers. It
//! computes the values a plotting call needs and leaves rendering to whatever library
//! draws the figure.
//!
//! ## Basic Usage
//!
//! ```rust
//! use plot_recipes::{DEFAULT_COMB, ScaleType, linear_axis_padding, log_ticks_base10,
//!     pcolor_box_coordinates};
//!
//! // Inset the data 5% from each edge of the axes
//! let (xmin, xmax) = linear_axis_padding(0.0, 2.0, 0.05);
//! assert!((xmin - -0.1).abs() < 1e-12 && (xmax - 2.1).abs() < 1e-12);
//!
//! // Cell edges for a pcolor mesh from cell centers
//! let edges = pcolor_box_coordinates(&[1.0, 10.0, 100.0], ScaleType::Log, None).unwrap();
//! assert_eq!(edges.len(), 4);
//!
//! // Minor ticks restricted to part of a log axis
//! let ticks = log_ticks_base10(3.0e2, 8.0e4, &DEFAULT_COMB);
//! assert_eq!(ticks.len(), 24);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `padding`: Linear and logarithmic axis padding
//! - `box_coords`: Cell-boundary coordinates for pcolor meshes
//! - `ticks`: Base-10 logarithmic tick enumeration
//! - `options`: Axis format and figure layout records using the builder pattern
//! - `scale`: The `ScaleType` enum and evenly spaced sample generators
//! - `error`: The crate error type
//!
//! ## Failure behaviour
//!
//! Each helper keeps its own failure style. Padding never fails (degenerate input gives
//! degenerate output, non-positive log input gives NaN). Box coordinates return `None`
//! when a single sample comes without a unit width. Tick enumeration always returns a
//! vector, possibly empty. Only parsing and record validation return [`RecipeError`].

pub mod box_coords;
pub mod error;
pub mod options;
pub mod padding;
pub mod scale;
pub mod ticks;


// Re-export commonly used types
pub use box_coords::{BoxMesh, UnitWidths, pcolor_box_coordinates};
pub use error::{RecipeError, Result};
pub use options::{AxesRect, AxisFormat, FigureLayout, FigureSize};
pub use padding::{
    axis_padding, data_limits, linear_axis_padding, log_axis_padding, padded_limits,
};
pub use scale::{ScaleType, linspace, logspace};
pub use ticks::{
    DEFAULT_COMB, LOG_TICK_REL_TOLERANCE, log_ticks_base10, major_log_ticks, minor_log_ticks,
};

// Type aliases
pub type Interval = (f64, f64);
