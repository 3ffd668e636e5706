//! Static Chart Renderer
//! Renders a [`ChartView`] to a PNG file with plotters.
//!
//! Layout mirrors the on-screen chart: white plot area, one bar per record with
//! the first record at the top, value gridlines only, names on the left axis and
//! value labels just past each bar end.

use super::ChartPlotter;
use crate::pipeline::{Background, BarColor, ChartView, LabelPosition};
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PNG_WIDTH: u32 = 1000;

const NAME_AREA_WIDTH: u32 = 160;
const VALUE_AREA_HEIGHT: u32 = 50;
const BAR_MARGIN: u32 = 3;
const LEGEND_LABEL: &str = "Salary";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `view` to a PNG at `output_path`, `width` pixels wide and `view.height` tall.
    pub fn render_png(
        view: &ChartView,
        output_path: &Path,
        width: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(output_path, (width, view.height)).into_drawing_area();
        Self::draw_chart(&root, view).map_err(|e| RenderError::Drawing(e.to_string()))?;
        root
            .present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        info!(path = %output_path.display(), bars = view.bars.len(), "saved chart image");
        Ok(())
    }

    /// Category axis with exactly one unit per bar and a key point at each bar center.
    fn category_axis(count: usize) -> (Range<f64>, Vec<f64>) {
        let centers = (0..count).map(|slot| slot as f64 + 0.5).collect();
        (0.0..count.max(1) as f64, centers)
    }

    /// Text anchor and pixel offset from the bar end for a value label.
    fn label_placement(position: LabelPosition) -> (Pos, (i32, i32)) {
        match position {
            LabelPosition::Outside => (Pos::new(HPos::Left, VPos::Center), (6, 0)),
        }
    }

    fn draw_chart<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        view: &ChartView,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        // A PNG has nothing behind it, so a transparent frame still comes out white
        let frame = match view.frame_background {
            Background::Solid(c) => c,
            Background::Transparent => BarColor::WHITE,
        };
        root.fill(&RGBColor::from(frame))?;

        let count = view.bars.len();
        let bar_color = RGBColor::from(view.bar_color);
        let show_names = view.category_axis_labels_visible;
        let x_max = ChartPlotter::value_axis_max(view);
        let (y_range, centers) = Self::category_axis(count);

        let mut chart = ChartBuilder::on(root)
            .margin(15)
            .set_label_area_size(
                LabelAreaPosition::Left,
                if show_names { NAME_AREA_WIDTH } else { 10 },
            )
            .set_label_area_size(LabelAreaPosition::Bottom, VALUE_AREA_HEIGHT)
            .build_cartesian_2d(0.0..x_max, y_range.with_key_points(centers))?;

        if let Background::Solid(c) = view.plot_background {
            chart.plotting_area().fill(&RGBColor::from(c))?;
        }

        let name_formatter = |v: &f64| {
            let slot = v.floor();
            if !show_names || slot < 0.0 || slot as usize >= count {
                return String::new();
            }
            view.bars[count - 1 - slot as usize].category.clone()
        };
        let value_formatter = |v: &f64| format!("{:.0}", v);

        let mut mesh = chart.configure_mesh();
        mesh.y_labels(count.max(1))
            .y_label_formatter(&name_formatter)
            .x_label_formatter(&value_formatter)
            .x_desc(view.value_axis_title.as_str())
            .axis_desc_style(("sans-serif", 16));
        if let Some(title) = &view.category_axis_title {
            mesh.y_desc(title.as_str());
        }
        if !view.category_gridlines {
            mesh.disable_y_mesh();
        }
        if !view.value_gridlines {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        let bars = chart.draw_series(view.bars.iter().enumerate().map(|(i, bar)| {
            let slot = ChartPlotter::slot(i, count);
            let mut rect = Rectangle::new([(0.0, slot), (bar.value, slot + 1.0)], bar_color.filled());
            rect.set_margin(BAR_MARGIN, BAR_MARGIN, 0, 0);
            rect
        }))?;

        if view.show_legend {
            bars.label(LEGEND_LABEL).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], bar_color.filled())
            });
        }

        chart.draw_series(view.bars.iter().zip(&view.value_labels).enumerate().map(
            |(i, (bar, label))| {
                let (anchor, offset) = Self::label_placement(label.position);
                let style = ("sans-serif", 14)
                    .into_font()
                    .color(&RGBColor::from(label.color))
                    .pos(anchor);
                EmptyElement::at((bar.value, ChartPlotter::slot(i, count) + 0.5))
                    + Text::new(label.text.clone(), offset, style)
            },
        ))?;

        if view.show_legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        Ok(())
    }
}
