//! Application configuration.
//!
//! Defaults are compiled in. An optional `empleatronix.json` in the working
//! directory may override any subset of fields.

use crate::pipeline::{BarColor, ChartConfig};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "empleatronix.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bar_color: BarColor,
    pub show_names: bool,
    pub show_values: bool,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("employees.csv"),
            bar_color: BarColor::CYAN,
            show_names: true,
            show_values: true,
            window_size: [1400.0, 800.0],
        }
    }
}

impl AppConfig {
    /// Read `path` if it exists. Missing or malformed files fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    pub fn initial_chart_config(&self) -> ChartConfig {
        ChartConfig {
            bar_color: self.bar_color,
            show_names: self.show_names,
            show_values: self.show_values,
        }
    }
}
