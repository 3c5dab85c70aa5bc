use crate::errors::ReportError;
use crate::loader::Record;

/// Field whose values define the groups.
const GROUP_FIELD: &str = "country";
/// Field averaged within each group.
const VALUE_FIELD: &str = "gdp";

/// Column headers for presenting [`GroupAverage`] results, in natural order.
pub const COLUMNS: [&str; 2] = [GROUP_FIELD, "average_gdp"];

/// The average of the numeric field over one group of records.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub country: String,
    pub average_gdp: f64,
}

impl GroupAverage {
    /// Returns the result as display cells matching [`COLUMNS`], with the
    /// average formatted to 2 decimal places.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![self.country.clone(), format!("{:.2}", self.average_gdp)]
    }
}

/// Generates the `average-gdp` report: the arithmetic mean of each country's
/// `gdp` values, sorted by that mean, highest first.
///
/// Grouping preserves the order in which countries are first encountered,
/// and the sort is stable, so countries with equal averages stay in
/// first-seen order. Averages are rounded to 2 decimal places, halves away
/// from zero.
///
/// # Errors
///
/// Fails with [`ReportError::MissingField`] if any record lacks `country` or
/// `gdp`, and with [`ReportError::InvalidNumber`] if a `gdp` value does not
/// parse as a number. Either condition aborts the whole report; there is no
/// partial output.
///
/// # Examples
///
/// ```
/// use econrep::{average_gdp, Record};
///
/// let records = vec![
///     Record::from_pairs([("country", "Japan"), ("gdp", "4256")]),
///     Record::from_pairs([("country", "Japan"), ("gdp", "4170")]),
/// ];
/// let results = average_gdp(&records).unwrap();
/// assert_eq!(results[0].average_gdp, 4213.0);
/// ```
pub fn average_gdp(records: &[Record]) -> Result<Vec<GroupAverage>, ReportError> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        let country = require(record, GROUP_FIELD)?;
        let raw = require(record, VALUE_FIELD)?;
        let gdp: f64 = raw.trim().parse().map_err(|_| ReportError::InvalidNumber {
            field: VALUE_FIELD.to_string(),
            value: raw.to_string(),
        })?;
        match groups.iter_mut().find(|(name, _)| name == country) {
            Some((_, values)) => values.push(gdp),
            None => groups.push((country.to_string(), vec![gdp])),
        }
    }
    let mut results: Vec<GroupAverage> = groups
        .into_iter()
        .map(|(country, values)| GroupAverage {
            country,
            average_gdp: round2(values.iter().sum::<f64>() / values.len() as f64),
        })
        .collect();
    results.sort_by(|a, b| b.average_gdp.total_cmp(&a.average_gdp));
    Ok(results)
}

fn require<'r>(record: &'r Record, field: &str) -> Result<&'r str, ReportError> {
    record.get(field).ok_or_else(|| ReportError::MissingField {
        field: field.to_string(),
    })
}

/// Rounds to 2 decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
