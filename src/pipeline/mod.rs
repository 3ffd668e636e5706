//! Render pipeline - pure table and chart views computed from the employee table

mod chart_view;
mod color;
mod table_view;

pub use chart_view::{render_chart, Background, ChartConfig, ChartView, LabelPosition};
pub use color::BarColor;
pub use table_view::{render_table, TableView};
