//! Charts module - Chart drawing and image export

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{StaticChartRenderer, DEFAULT_PNG_WIDTH};
