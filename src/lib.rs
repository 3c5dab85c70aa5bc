#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod errors;
pub mod loader;
pub mod report;
pub mod table;

pub use catalog::{Catalog, ReportFn};
pub use errors::ReportError;
pub use loader::{read_csv_files, Record};
pub use report::{average_gdp, GroupAverage};
pub use table::Table;
