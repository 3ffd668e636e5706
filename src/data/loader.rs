//! Employee Data Loader Module
//! Reads the employee CSV with Polars and memoizes the parsed table.

use super::EmployeeTable;
use polars::prelude::*;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),
    #[error("Invalid salary in data row {}", .row + 1)]
    InvalidSalary { row: usize },
}

/// Reads the employee table from a fixed CSV path.
#[derive(Debug, Clone)]
pub struct DataSource {
    path: PathBuf,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the CSV file into an [`EmployeeTable`]. Always touches the file system.
    pub fn read(&self) -> Result<EmployeeTable, DataLoadError> {
        if !self.path.is_file() {
            return Err(DataLoadError::NotFound(self.path.clone()));
        }

        let df = LazyCsvReader::new(&self.path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        debug!(
            path = %self.path.display(),
            rows = df.height(),
            columns = df.width(),
            "parsed employee csv"
        );

        EmployeeTable::from_dataframe(&df)
    }
}

/// Result of one cache lookup: always a table, plus a message when loading failed.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub table: Arc<EmployeeTable>,
    pub diagnostic: Option<String>,
}

/// Write-once cache in front of a [`DataSource`].
///
/// Owned by the application; the slot is filled by the first successful read and
/// only emptied by [`TableCache::clear`]. Failed reads are not memoized.
pub struct TableCache {
    source: DataSource,
    slot: OnceCell<Arc<EmployeeTable>>,
}

impl TableCache {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            slot: OnceCell::new(),
        }
    }

    pub fn is_cached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Return the cached table, reading the file only on a miss.
    ///
    /// On failure the returned table is empty and `diagnostic` carries the message.
    pub fn load(&self) -> LoadOutcome {
        if let Some(table) = self.slot.get() {
            debug!(rows = table.len(), "employee table served from cache");
            return LoadOutcome {
                table: Arc::clone(table),
                diagnostic: None,
            };
        }

        match self.source.read() {
            Ok(table) => {
                info!(
                    path = %self.source.path().display(),
                    rows = table.len(),
                    "loaded employee table"
                );
                let table = Arc::clone(self.slot.get_or_init(|| Arc::new(table)));
                LoadOutcome {
                    table,
                    diagnostic: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                warn!(
                    path = %self.source.path().display(),
                    error = %message,
                    "employee data unavailable"
                );
                LoadOutcome {
                    table: Arc::new(EmployeeTable::empty()),
                    diagnostic: Some(message),
                }
            }
        }
    }

    /// Drop the memoized table so the next [`TableCache::load`] re-reads the file.
    pub fn clear(&mut self) {
        if self.slot.take().is_some() {
            info!("employee table cache cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EmployeeRecord;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE_CSV: &str = "full name,salary,gender,email\n\
Ana Pérez,45000,F,ana@x.com\n\
Luis Gómez,52000,M,luis@x.com\n\
Kim Lee,61000,F,kim@x.com\n";

    fn write_csv(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("employees.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_matches_file_contents() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), SAMPLE_CSV);

        let table = DataSource::new(&path).read().unwrap();
        assert_eq!(
            table.records(),
            &[
                EmployeeRecord::new("Ana Pérez", 45000.0, "F", "ana@x.com"),
                EmployeeRecord::new("Luis Gómez", 52000.0, "M", "luis@x.com"),
                EmployeeRecord::new("Kim Lee", 61000.0, "F", "kim@x.com"),
            ]
        );
    }

    #[test]
    fn test_duplicate_rows_are_kept() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "full name,salary,gender,email\nA,1,F,a@x.com\nA,1,F,a@x.com\n",
        );

        let table = DataSource::new(&path).read().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], table.records()[1]);
    }

    #[test]
    fn test_second_load_does_not_reread_file() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), SAMPLE_CSV);
        let cache = TableCache::new(DataSource::new(&path));

        let first = cache.load();
        assert!(first.diagnostic.is_none());
        assert!(cache.is_cached());

        fs::write(&path, "full name,salary,gender,email\nZed,1,M,z@x.com\n").unwrap();

        let second = cache.load();
        assert!(Arc::ptr_eq(&first.table, &second.table));
        assert_eq!(second.table.len(), 3);
        assert_eq!(second.table.records()[0].full_name, "Ana Pérez");
    }

    #[test]
    fn test_clear_forces_reread() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), SAMPLE_CSV);
        let mut cache = TableCache::new(DataSource::new(&path));
        assert_eq!(cache.load().table.len(), 3);

        fs::write(&path, "full name,salary,gender,email\nZed,1,M,z@x.com\n").unwrap();
        cache.clear();
        assert!(!cache.is_cached());

        let reloaded = cache.load();
        assert_eq!(reloaded.table.len(), 1);
        assert_eq!(reloaded.table.records()[0].full_name, "Zed");
    }

    #[test]
    fn test_missing_file_yields_empty_table_and_one_diagnostic() {
        let dir = tempdir().unwrap();
        let cache = TableCache::new(DataSource::new(dir.path().join("absent.csv")));

        let outcome = cache.load();
        assert!(outcome.table.is_empty());
        let message = outcome.diagnostic.expect("diagnostic");
        assert!(message.contains("not found"));
        assert!(!cache.is_cached());
    }

    #[test]
    fn test_failed_load_is_retried_once_file_appears() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let cache = TableCache::new(DataSource::new(&path));
        assert!(cache.load().diagnostic.is_some());

        write_csv(dir.path(), SAMPLE_CSV);
        let outcome = cache.load();
        assert!(outcome.diagnostic.is_none());
        assert_eq!(outcome.table.len(), 3);
    }

    #[test]
    fn test_renamed_column_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "name,salary,gender,email\nAna,45000,F,ana@x.com\n",
        );

        let err = DataSource::new(&path).read().unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(ref c) if c == "full name"));

        let outcome = TableCache::new(DataSource::new(&path)).load();
        assert!(outcome.table.is_empty());
        assert_eq!(
            outcome.diagnostic.as_deref(),
            Some("Missing required column: 'full name'")
        );
    }

    #[test]
    fn test_non_numeric_salary_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "full name,salary,gender,email\nAna,lots,F,ana@x.com\n",
        );

        assert!(DataSource::new(&path).read().is_err());
    }
}
