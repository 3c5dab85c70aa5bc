use crate::errors::ReportError;
use crate::loader::Record;
use crate::report::{self, GroupAverage};

/// A report: a pure transform from a record sequence to a result sequence.
pub type ReportFn = fn(&[Record]) -> Result<Vec<GroupAverage>, ReportError>;

/// The registry of available reports, built once at startup and immutable
/// thereafter.
///
/// Look a report up by name with [`Catalog::lookup`] before doing any file
/// I/O, so an unknown name is rejected cheaply.
#[derive(Debug)]
pub struct Catalog {
    reports: Vec<(&'static str, ReportFn)>,
}

impl Catalog {
    /// Creates the catalog with the fixed set of registered reports.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: vec![("average-gdp", report::average_gdp as ReportFn)],
        }
    }

    /// Returns the report registered under `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`ReportError::UnknownReport`], carrying the requested name
    /// and the list of valid names, if no such report is registered.
    pub fn lookup(&self, name: &str) -> Result<ReportFn, ReportError> {
        self.reports
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, f)| *f)
            .ok_or_else(|| ReportError::UnknownReport {
                name: name.to_string(),
                available: self.names().iter().map(ToString::to_string).collect(),
            })
    }

    /// The names of all registered reports.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
