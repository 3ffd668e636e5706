//! Chart view: the complete description of the salary bar chart for one render.
//!
//! Layout policy is fixed: horizontal bars in file order, one color for every bar,
//! no legend, white plot area inside a transparent frame, gridlines on the value
//! axis only. Only color and the two label toggles come from the user.

use super::BarColor;
use crate::data::EmployeeTable;
use serde::Serialize;

pub const MIN_CHART_HEIGHT: u32 = 400;
pub const ROW_HEIGHT: u32 = 25;
pub const VALUE_AXIS_TITLE: &str = "Salary ($)";

/// User-controlled options, rebuilt from the controls every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartConfig {
    pub bar_color: BarColor,
    pub show_names: bool,
    pub show_values: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_color: BarColor::CYAN,
            show_names: true,
            show_values: true,
        }
    }
}

/// `max(MIN_CHART_HEIGHT, rows * ROW_HEIGHT)`, so long tables never squeeze bars together.
pub fn chart_height(rows: usize) -> u32 {
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    MIN_CHART_HEIGHT.max(rows.saturating_mul(ROW_HEIGHT))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelPosition {
    /// Just past the end of the bar.
    Outside,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueLabel {
    pub text: String,
    pub position: LabelPosition,
    pub color: BarColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Background {
    Solid(BarColor),
    Transparent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    /// One bar per record, in file order.
    pub bars: Vec<Bar>,
    pub bar_color: BarColor,
    pub value_axis_title: String,
    pub category_axis_title: Option<String>,
    pub category_axis_labels_visible: bool,
    /// Empty unless value labels are enabled; otherwise index-aligned with `bars`.
    pub value_labels: Vec<ValueLabel>,
    pub height: u32,
    pub show_legend: bool,
    pub plot_background: Background,
    pub frame_background: Background,
    pub value_gridlines: bool,
    pub category_gridlines: bool,
}

impl ChartView {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// `$` with comma thousands grouping and no decimals: `45000.0` -> `$45,000`.
pub fn format_salary_label(salary: f64) -> String {
    let whole = salary.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn render_chart(table: &EmployeeTable, config: &ChartConfig) -> ChartView {
    let bars: Vec<Bar> = table
        .records()
        .iter()
        .map(|r| Bar {
            category: r.full_name.clone(),
            value: r.salary,
        })
        .collect();

    let value_labels = if config.show_values {
        bars.iter()
            .map(|b| ValueLabel {
                text: format_salary_label(b.value),
                position: LabelPosition::Outside,
                color: config.bar_color,
            })
            .collect()
    } else {
        Vec::new()
    };

    ChartView {
        height: chart_height(bars.len()),
        bars,
        bar_color: config.bar_color,
        value_axis_title: VALUE_AXIS_TITLE.to_string(),
        category_axis_title: None,
        category_axis_labels_visible: config.show_names,
        value_labels,
        show_legend: false,
        plot_background: Background::Solid(BarColor::WHITE),
        frame_background: Background::Transparent,
        value_gridlines: true,
        category_gridlines: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EmployeeRecord;

    fn table_of(n: usize) -> EmployeeTable {
        EmployeeTable::new(
            (0..n)
                .map(|i| {
                    EmployeeRecord::new(
                        &format!("Employee {i}"),
                        30000.0 + i as f64 * 1000.0,
                        "F",
                        &format!("e{i}@x.com"),
                    )
                })
                .collect(),
        )
    }

    fn scenario() -> EmployeeTable {
        EmployeeTable::new(vec![
            EmployeeRecord::new("Ana Pérez", 45000.0, "F", "ana@x.com"),
            EmployeeRecord::new("Luis Gómez", 52000.0, "M", "luis@x.com"),
            EmployeeRecord::new("Kim Lee", 61000.0, "F", "kim@x.com"),
        ])
    }

    #[test]
    fn test_height_scales_with_rows() {
        let config = ChartConfig::default();
        assert_eq!(render_chart(&table_of(0), &config).height, 400);
        assert_eq!(render_chart(&table_of(10), &config).height, 400);
        assert_eq!(render_chart(&table_of(16), &config).height, 400);
        assert_eq!(render_chart(&table_of(17), &config).height, 425);
        assert_eq!(render_chart(&table_of(50), &config).height, 1250);
    }

    #[test]
    fn test_height_saturates_instead_of_overflowing() {
        assert_eq!(chart_height(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_scenario_bars_follow_file_order() {
        let view = render_chart(&scenario(), &ChartConfig::default());
        let categories: Vec<&str> = view.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(categories, ["Ana Pérez", "Luis Gómez", "Kim Lee"]);
        let values: Vec<f64> = view.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, [45000.0, 52000.0, 61000.0]);
        assert_eq!(view.value_axis_title, "Salary ($)");
        assert_eq!(view.category_axis_title, None);
        assert_eq!(view.max_value(), 61000.0);
    }

    #[test]
    fn test_hidden_names_regardless_of_values_toggle() {
        for show_values in [true, false] {
            let config = ChartConfig {
                show_names: false,
                show_values,
                ..ChartConfig::default()
            };
            let view = render_chart(&scenario(), &config);
            assert!(!view.category_axis_labels_visible);
            assert_eq!(view.bars.len(), 3);
            assert_eq!(view.height, 400);
        }
    }

    #[test]
    fn test_value_labels_mirror_bar_color() {
        let config = ChartConfig {
            bar_color: BarColor::from_rgb(200, 10, 10),
            show_names: true,
            show_values: true,
        };
        let view = render_chart(&scenario(), &config);
        let texts: Vec<&str> = view.value_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["$45,000", "$52,000", "$61,000"]);
        assert!(view
            .value_labels
            .iter()
            .all(|l| l.color == config.bar_color && l.position == LabelPosition::Outside));
        assert_eq!(view.bar_color, config.bar_color);
    }

    #[test]
    fn test_value_labels_off() {
        let config = ChartConfig {
            show_values: false,
            ..ChartConfig::default()
        };
        assert!(render_chart(&scenario(), &config).value_labels.is_empty());
    }

    #[test]
    fn test_fixed_visual_policy() {
        let view = render_chart(&EmployeeTable::empty(), &ChartConfig::default());
        assert!(view.bars.is_empty());
        assert!(view.value_labels.is_empty());
        assert!(!view.show_legend);
        assert_eq!(view.plot_background, Background::Solid(BarColor::WHITE));
        assert_eq!(view.frame_background, Background::Transparent);
        assert!(view.value_gridlines);
        assert!(!view.category_gridlines);
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = table_of(25);
        let config = ChartConfig::default();
        let a = serde_json::to_string(&render_chart(&table, &config)).unwrap();
        let b = serde_json::to_string(&render_chart(&table, &config)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_salary_label_grouping() {
        assert_eq!(format_salary_label(0.0), "$0");
        assert_eq!(format_salary_label(999.0), "$999");
        assert_eq!(format_salary_label(1000.0), "$1,000");
        assert_eq!(format_salary_label(61000.4), "$61,000");
        assert_eq!(format_salary_label(1234567.0), "$1,234,567");
    }
}
