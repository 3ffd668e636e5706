//! Data module - employee CSV loading, caching and export

mod loader;
mod table;
mod writer;

pub use loader::{DataLoadError, DataSource, TableCache};
pub use table::{EmployeeRecord, EmployeeTable};
pub use writer::TableWriter;
