//! Cell-boundary ("box") coordinates for pcolor-style meshes
//!
//! Mesh plots that take cell edges need one more coordinate per axis than there are
//! samples. Given N cell centers spaced uniformly (in data units or in decades), the
//! edges are the midpoints between neighbours plus half a step beyond each end.

use crate::scale::{ScaleType, linspace};
use serde::Serialize;
use tracing::{debug, warn};

/// Convert `x` cell centers into `x.len() + 1` cell edges
///
/// The spacing is taken from the first two samples and assumed to hold across the
/// whole array; non-uniform input is not detected. On a log axis the spacing is measured
/// in decades and the samples must be positive.
///
/// A single sample has no neighbour to infer a width from, so `unit_width` (in data
/// units) is required in that case. Without it a warning is logged and `None` is
/// returned, as it is for an empty slice.
///
/// ```rust
/// use plot_recipes::{ScaleType, pcolor_box_coordinates};
///
/// let edges = pcolor_box_coordinates(&[0.0, 1.0, 2.0], ScaleType::Linear, None).unwrap();
/// assert_eq!(edges, vec![-0.5, 0.5, 1.5, 2.5]);
///
/// let single = pcolor_box_coordinates(&[0.0], ScaleType::Linear, Some(1.0)).unwrap();
/// assert_eq!(single, vec![-0.5, 0.5]);
///
/// assert!(pcolor_box_coordinates(&[0.0], ScaleType::Linear, None).is_none());
/// ```
pub fn pcolor_box_coordinates(
    x: &[f64],
    scale: ScaleType,
    unit_width: Option<f64>,
) -> Option<Vec<f64>> {
    match x {
        [] => {
            warn!("cannot derive box coordinates from an empty sample array");
            None
        }
        [x0] => match unit_width {
            Some(width) => Some(vec![x0 - width / 2.0, x0 + width / 2.0]),
            None => {
                warn!(
                    "box coordinates for a single sample ({}) need an explicit unit width",
                    x0
                );
                None
            }
        },
        [first, second, rest @ ..] => {
            let last = rest.last().unwrap_or(second);
            let lo = scale.to_uniform(*first);
            let hi = scale.to_uniform(*last);
            let dx = scale.to_uniform(*second) - lo;

            let edges: Vec<f64> = linspace(lo - dx / 2.0, hi + dx / 2.0, x.len() + 1)
                .into_iter()
                .map(|v| scale.from_uniform(v))
                .collect();
            debug!(
                "{} box coordinates from {} {} samples",
                edges.len(),
                x.len(),
                scale
            );
            Some(edges)
        }
    }
}

/// Unit widths for the single-sample case of each mesh axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitWidths {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Cell edges for both axes of a 2-D pcolor mesh
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxMesh {
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
}

impl BoxMesh {
    /// Derive edges for both axes; `None` if either axis cannot be derived
    pub fn new(
        x: &[f64],
        x_scale: ScaleType,
        y: &[f64],
        y_scale: ScaleType,
        unit_widths: UnitWidths,
    ) -> Option<Self> {
        let x_edges = pcolor_box_coordinates(x, x_scale, unit_widths.x)?;
        let y_edges = pcolor_box_coordinates(y, y_scale, unit_widths.y)?;
        Some(Self { x_edges, y_edges })
    }

    /// Number of cells as (rows, columns), i.e. (y samples, x samples)
    pub fn shape(&self) -> (usize, usize) {
        (self.y_edges.len() - 1, self.x_edges.len() - 1)
    }

    /// Number of edges as (rows, columns)
    pub fn edge_shape(&self) -> (usize, usize) {
        (self.y_edges.len(), self.x_edges.len())
    }

    /// Edges of cell `(row, col)` as `((x0, x1), (y0, y1))`
    pub fn cell(&self, row: usize, col: usize) -> Option<((f64, f64), (f64, f64))> {
        let x = (*self.x_edges.get(col)?, *self.x_edges.get(col + 1)?);
        let y = (*self.y_edges.get(row)?, *self.y_edges.get(row + 1)?);
        Some((x, y))
    }
}
