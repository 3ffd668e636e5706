//! Employee Table Module
//! Typed rows extracted from the employee CSV DataFrame.

use polars::prelude::*;
use serde::Serialize;

use super::DataLoadError;

/// CSV header names the dashboard depends on, in display order.
pub const COL_FULL_NAME: &str = "full name";
pub const COL_SALARY: &str = "salary";
pub const COL_GENDER: &str = "gender";
pub const COL_EMAIL: &str = "email";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_FULL_NAME, COL_SALARY, COL_GENDER, COL_EMAIL];

/// One employee row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    pub full_name: String,
    pub salary: f64,
    pub gender: String,
    pub email: String,
}

impl EmployeeRecord {
    pub fn new(full_name: &str, salary: f64, gender: &str, email: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            salary,
            gender: gender.to_string(),
            email: email.to_string(),
        }
    }
}

/// Ordered employee rows, in file order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeTable {
    records: Vec<EmployeeRecord>,
}

impl EmployeeTable {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a table from a DataFrame holding the four required columns.
    ///
    /// Salary is cast to `Float64` and must be present, finite and non-negative.
    /// Null text cells become empty strings; extra columns are ignored.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, DataLoadError> {
        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(DataLoadError::MissingColumn(name.to_string()));
            }
        }

        let names = Self::text_column(df, COL_FULL_NAME)?;
        let genders = Self::text_column(df, COL_GENDER)?;
        let emails = Self::text_column(df, COL_EMAIL)?;

        let salary_f64 = df.column(COL_SALARY)?.cast(&DataType::Float64)?;
        let salary_ca = salary_f64.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for (row, salary) in salary_ca.into_iter().enumerate() {
            let salary = match salary {
                Some(v) if v.is_finite() && v >= 0.0 => v,
                _ => return Err(DataLoadError::InvalidSalary { row }),
            };
            records.push(EmployeeRecord {
                full_name: names[row].clone(),
                salary,
                gender: genders[row].clone(),
                email: emails[row].clone(),
            });
        }

        Ok(Self { records })
    }

    /// Convert back to a DataFrame with the source column names.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.records.iter().map(|r| r.full_name.as_str()).collect();
        let salaries: Vec<f64> = self.records.iter().map(|r| r.salary).collect();
        let genders: Vec<&str> = self.records.iter().map(|r| r.gender.as_str()).collect();
        let emails: Vec<&str> = self.records.iter().map(|r| r.email.as_str()).collect();

        DataFrame::new(vec![
            Column::new(COL_FULL_NAME.into(), names),
            Column::new(COL_SALARY.into(), salaries),
            Column::new(COL_GENDER.into(), genders),
            Column::new(COL_EMAIL.into(), emails),
        ])
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>, DataLoadError> {
        let as_text = df.column(name)?.cast(&DataType::String)?;
        let ca = as_text.as_materialized_series().str()?;
        Ok(ca
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect())
    }
}
