//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod table_viewer;

pub use app::EmpleatronixApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use table_viewer::TableViewer;
