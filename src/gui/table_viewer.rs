//! Table Viewer Widget
//! Striped employee table drawn with egui_extras.

use crate::pipeline::TableView;
use egui_extras::{Column, TableBuilder};

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 20.0;

#[derive(Default)]
pub struct TableViewer {
    view: TableView,
}

impl TableViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: TableView) {
        self.view = view;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(70.0), self.view.headers.len() - 1)
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                for title in self.view.headers {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, self.view.rows.len(), |mut row| {
                    let record = &self.view.rows[row.index()];
                    for cell in record.cells() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    }
}
