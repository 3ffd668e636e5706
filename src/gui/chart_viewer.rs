//! Chart Viewer Widget
//! Holds the last computed chart view and draws it with egui_plot.

use crate::charts::ChartPlotter;
use crate::pipeline::ChartView;

pub struct ChartViewer {
    view: ChartView,
}

impl ChartViewer {
    pub fn new(view: ChartView) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    pub fn set_view(&mut self, view: ChartView) {
        self.view = view;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("chart_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ChartPlotter::draw_salary_chart(ui, &self.view);
            });
    }
}
