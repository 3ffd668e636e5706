//! Table view: display-ready rows for the employee table widget.

use crate::data::EmployeeTable;
use serde::Serialize;

/// Column headers in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Full Name", "Salary", "Gender", "Email"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub full_name: String,
    pub salary: String,
    pub gender: String,
    pub email: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.full_name.as_str(),
            self.salary.as_str(),
            self.gender.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Header plus formatted rows. No index column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub headers: [&'static str; 4],
    pub rows: Vec<TableRow>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            headers: TABLE_HEADERS,
            rows: Vec::new(),
        }
    }
}

/// `$` followed by the whole-dollar amount, no grouping: `45000.0` -> `$45000`.
pub fn format_salary_cell(salary: f64) -> String {
    format!("${}", salary.round() as i64)
}

pub fn render_table(table: &EmployeeTable) -> TableView {
    let rows = table
        .records()
        .iter()
        .map(|r| TableRow {
            full_name: r.full_name.clone(),
            salary: format_salary_cell(r.salary),
            gender: r.gender.clone(),
            email: r.email.clone(),
        })
        .collect();

    TableView {
        headers: TABLE_HEADERS,
        rows,
    }
}
