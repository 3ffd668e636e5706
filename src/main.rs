//! Empleatronix - Employee Salary Dashboard
//!
//! Loads the employee CSV once, shows it as a table and as a horizontal bar chart
//! of salaries with color and label controls.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;

use config::{AppConfig, CONFIG_FILE};
use eframe::egui;
use gui::EmpleatronixApp;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title("Empleatronix"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Empleatronix",
        options,
        Box::new(|cc| Ok(Box::new(EmpleatronixApp::new(cc, config)))),
    )
}
