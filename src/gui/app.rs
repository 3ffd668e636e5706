//! Empleatronix Main Application
//! Main window with the employee table on the left and the salary chart on the right.

use crate::charts::{StaticChartRenderer, DEFAULT_PNG_WIDTH};
use crate::config::AppConfig;
use crate::data::{DataSource, EmployeeTable, TableCache, TableWriter};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, TableViewer};
use crate::pipeline::{render_chart, render_table};
use anyhow::{Context, Result};
use egui::{Color32, RichText, SidePanel, TopBottomPanel};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// Outcome of the last export, shown under the chart controls.
enum ExportStatus {
    Saved(String),
    Failed(String),
}

/// Main application window.
pub struct EmpleatronixApp {
    cache: TableCache,
    control_panel: ControlPanel,
    table_viewer: TableViewer,
    chart_viewer: ChartViewer,

    table: Arc<EmployeeTable>,
    diagnostic: Option<String>,
    export_status: Option<ExportStatus>,
}

impl EmpleatronixApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_config(config);
        app.run_render_cycle();
        app
    }

    fn with_config(config: AppConfig) -> Self {
        let chart_config = config.initial_chart_config();
        let table = Arc::new(EmployeeTable::empty());

        Self {
            cache: TableCache::new(DataSource::new(config.data_path)),
            control_panel: ControlPanel::new(chart_config),
            table_viewer: TableViewer::new(),
            chart_viewer: ChartViewer::new(render_chart(&table, &chart_config)),
            table,
            diagnostic: None,
            export_status: None,
        }
    }

    /// Fetch the table (cached after the first successful read) and rebuild both views.
    fn run_render_cycle(&mut self) {
        let outcome = self.cache.load();
        self.table = outcome.table;
        self.diagnostic = outcome.diagnostic;

        self.table_viewer.set_view(render_table(&self.table));
        self.chart_viewer
            .set_view(render_chart(&self.table, &self.control_panel.config));
        debug!(
            rows = self.table.len(),
            config = ?self.control_panel.config,
            "render cycle complete"
        );
    }

    /// Row count plus whether the next render will be served from memory.
    fn table_status(&self) -> String {
        let cache_state = if self.cache.is_cached() {
            "cached"
        } else {
            "not cached"
        };
        format!("{} employees · {}", self.table.len(), cache_state)
    }

    fn handle_clear_cache(&mut self) {
        self.cache.clear();
        self.run_render_cycle();
    }

    fn handle_export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("employees_export.csv")
            .save_file()
        else {
            return; // User cancelled
        };

        let result = Self::export_csv(&self.table, &path);
        self.record_export(result, &path);
    }

    fn handle_save_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("salary_chart.png")
            .save_file()
        else {
            return;
        };

        let result =
            StaticChartRenderer::render_png(self.chart_viewer.view(), &path, DEFAULT_PNG_WIDTH)
                .with_context(|| format!("saving chart to {}", path.display()));
        self.record_export(result, &path);
    }

    fn export_csv(table: &EmployeeTable, path: &Path) -> Result<()> {
        TableWriter::write_csv(table, path)
            .with_context(|| format!("exporting table to {}", path.display()))
    }

    fn record_export(&mut self, result: Result<()>, path: &Path) {
        self.export_status = Some(match result {
            Ok(()) => ExportStatus::Saved(format!("Saved {}", path.display())),
            Err(e) => {
                error!(error = ?e, "export failed");
                ExportStatus::Failed(format!("Error: {e:#}"))
            }
        });
    }

    fn show_header(ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.heading(RichText::new("EMPLEATRONIX").size(28.0).strong());
        ui.label("Todos los datos sobre los empleados en una aplicación.");
        ui.add_space(6.0);
    }
}

impl eframe::App for EmpleatronixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            Self::show_header(ui);
        });

        // Left panel - employee table, 2/5 of the window
        let table_width = ctx.screen_rect().width() * 0.4;
        SidePanel::left("employee_table_panel")
            .default_width(table_width)
            .min_width(300.0)
            .show(ctx, |ui| {
                if let Some(message) = &self.diagnostic {
                    ui.label(RichText::new(format!("⚠ {}", message)).color(ERROR_COLOR));
                    ui.add_space(5.0);
                }

                let mut export_clicked = false;
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.table_status()).size(12.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        export_clicked = ui.small_button("⬇ Download CSV").clicked();
                    });
                });
                ui.separator();

                egui::ScrollArea::horizontal().show(ui, |ui| {
                    self.table_viewer.show(ui);
                });

                if export_clicked {
                    self.handle_export_csv();
                }
            });

        // Central panel - controls and chart
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = self.control_panel.show(ui);

            match action {
                ControlPanelAction::ConfigChanged => self.run_render_cycle(),
                ControlPanelAction::ClearCache => self.handle_clear_cache(),
                ControlPanelAction::SavePng => self.handle_save_png(),
                ControlPanelAction::None => {}
            }

            match &self.export_status {
                Some(ExportStatus::Saved(msg)) => {
                    ui.label(RichText::new(msg).size(11.0).color(OK_COLOR));
                }
                Some(ExportStatus::Failed(msg)) => {
                    ui.label(RichText::new(msg).size(11.0).color(ERROR_COLOR));
                }
                None => {}
            }

            ui.add_space(10.0);
            self.chart_viewer.show(ui);
        });
    }
}
