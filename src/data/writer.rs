//! Table Writer Module
//! Exports the loaded employee table back to CSV.

use super::EmployeeTable;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
}

pub struct TableWriter;

impl TableWriter {
    /// Write `table` as CSV with the source column headers.
    pub fn write_csv(table: &EmployeeTable, output_path: &Path) -> Result<(), WriterError> {
        let mut df = table.to_dataframe()?;
        let mut file = File::create(output_path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;

        info!(path = %output_path.display(), rows = table.len(), "exported employee table");
        Ok(())
    }
}
