//! Control Panel Widget
//! Bar color picker, label toggles and export buttons above the chart.

use crate::pipeline::ChartConfig;
use egui::RichText;

/// Chart controls. Holds the live [`ChartConfig`] between frames.
pub struct ControlPanel {
    pub config: ChartConfig,
}

impl ControlPanel {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Draw the controls and report what the user did this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.label(RichText::new("Elige un color para las barras").size(14.0));
        let mut rgb = self.config.bar_color.to_array();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            self.config.bar_color = rgb.into();
            action = ControlPanelAction::ConfigChanged;
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .checkbox(&mut self.config.show_names, "Mostrar el nombre")
                .changed()
            {
                action = ControlPanelAction::ConfigChanged;
            }
            ui.add_space(20.0);
            if ui
                .checkbox(&mut self.config.show_values, "Mostrar sueldo en la barra")
                .changed()
            {
                action = ControlPanelAction::ConfigChanged;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🖼 Save PNG").clicked() {
                    action = ControlPanelAction::SavePng;
                }
                if ui.button("🔄 Clear cache").clicked() {
                    action = ControlPanelAction::ClearCache;
                }
            });
        });

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ConfigChanged,
    ClearCache,
    SavePng,
}
