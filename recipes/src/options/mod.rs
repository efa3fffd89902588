pub mod axis;
pub mod figure;

pub use axis::{AxisFormat, AxisFormatBuilder};
pub use figure::{AxesRect, FigureLayout, FigureLayoutBuilder, FigureSize};
