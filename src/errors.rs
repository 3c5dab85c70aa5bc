use thiserror::Error;

/// Error conditions raised while looking up or generating a report.
///
/// Per-file loading problems are deliberately absent: the loader warns and
/// skips, and only the aggregate outcome ("no records at all") is an error.
/// Every variant displays as a single line suitable for an end user.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    /// The requested report name is not registered in the catalog.
    #[error("unknown report '{}' (available reports: {})", .name, .available.join(", "))]
    UnknownReport {
        name: String,
        available: Vec<String>,
    },
    /// Zero records were collected across all input files.
    #[error("no valid data found in the provided files")]
    NoData,
    /// A record lacks a field the report requires.
    #[error("record is missing required field '{field}'")]
    MissingField { field: String },
    /// A required numeric field holds a value that does not parse as a number.
    #[error("field '{field}' has non-numeric value '{value}'")]
    InvalidNumber { field: String, value: String },
}
