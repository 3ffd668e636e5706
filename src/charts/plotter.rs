//! Chart Plotter Module
//! Draws a [`ChartView`] as an interactive horizontal bar chart using egui_plot.

use crate::pipeline::{Background, ChartView, LabelPosition};
use egui::{Align2, Color32, RichText, Shape};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoint, Text};

/// Fraction of a category slot filled by its bar.
const BAR_WIDTH: f64 = 0.7;
/// Extra room right of the longest bar so outside labels are not clipped.
const LABEL_HEADROOM: f64 = 0.15;
const LEGEND_LABEL: &str = "Salary";

/// Draws salary charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical slot for the bar at `index`; the first record sits at the top.
    pub fn slot(index: usize, count: usize) -> f64 {
        (count - 1 - index) as f64
    }

    /// Upper bound of the value axis.
    pub fn value_axis_max(view: &ChartView) -> f64 {
        let max = view.max_value();
        if max <= 0.0 {
            return 1.0;
        }
        if view.value_labels.is_empty() {
            max * 1.05
        } else {
            max * (1.0 + LABEL_HEADROOM)
        }
    }

    pub fn background_fill(background: Background) -> Color32 {
        match background {
            Background::Solid(c) => c.into(),
            Background::Transparent => Color32::TRANSPARENT,
        }
    }

    pub fn label_anchor(position: LabelPosition) -> Align2 {
        match position {
            LabelPosition::Outside => Align2::LEFT_CENTER,
        }
    }

    pub fn draw_salary_chart(ui: &mut egui::Ui, view: &ChartView) {
        egui::Frame::none()
            .fill(Self::background_fill(view.frame_background))
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                Self::draw_plot(ui, view);
            });
    }

    fn draw_plot(ui: &mut egui::Ui, view: &ChartView) {
        let count = view.bars.len();
        let color: Color32 = view.bar_color.into();
        let categories: Vec<String> = view.bars.iter().map(|b| b.category.clone()).collect();
        let show_names = view.category_axis_labels_visible;

        // Filled with the plot background once the plot rect is known
        let plot_bg = ui.painter().add(Shape::Noop);

        let mut plot = Plot::new("salary_chart")
            .height(view.height as f32)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .show_background(false)
            .show_grid([view.value_gridlines, view.category_gridlines])
            .x_axis_label(view.value_axis_title.clone())
            .include_x(0.0)
            .include_x(Self::value_axis_max(view))
            .include_y(-0.5)
            .include_y(count.max(1) as f64 - 0.5)
            // One tick per bar so every name lines up with its row
            .y_grid_spacer(move |_input| {
                (0..count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                if !show_names {
                    return String::new();
                }
                let v = mark.value.round();
                if (mark.value - v).abs() > 1e-6 || v < 0.0 || v as usize >= count {
                    return String::new();
                }
                categories[count - 1 - v as usize].clone()
            });
        if let Some(title) = &view.category_axis_title {
            plot = plot.y_axis_label(title.clone());
        }
        if view.show_legend {
            plot = plot.legend(Legend::default());
        }

        let response = plot.show(ui, |plot_ui| {
            if count == 0 {
                return;
            }

            let bars: Vec<Bar> = view
                .bars
                .iter()
                .enumerate()
                .map(|(i, b)| {
                    Bar::new(Self::slot(i, count), b.value)
                        .name(&b.category)
                        .fill(color)
                        .width(BAR_WIDTH)
                })
                .collect();
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(LEGEND_LABEL)
                    .horizontal()
                    .color(color),
            );

            // Value labels just past the bar end, in the bar color
            let nudge = Self::value_axis_max(view) * 0.01;
            for (i, (bar, label)) in view.bars.iter().zip(&view.value_labels).enumerate() {
                let label_color: Color32 = label.color.into();
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(bar.value + nudge, Self::slot(i, count)),
                        RichText::new(&label.text).size(12.0),
                    )
                    .color(label_color)
                    .anchor(Self::label_anchor(label.position)),
                );
            }
        });

        ui.painter().set(
            plot_bg,
            Shape::rect_filled(
                *response.transform.frame(),
                0.0,
                Self::background_fill(view.plot_background),
            ),
        );
    }
}
