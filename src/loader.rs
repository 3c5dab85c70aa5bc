use anyhow::{Context, Result};

use std::path::Path;

/// One row of input data, as an ordered field-name-to-value mapping.
///
/// Values are kept as the text originally parsed from the file; no type
/// coercion happens at load time. Consumers look up the fields they need
/// with [`Record::get`] and must not assume every field is present: a row
/// shorter than its header row simply has the trailing fields unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Builds a record from field-name/value pairs, preserving their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use econrep::Record;
    ///
    /// let record = Record::from_pairs([("country", "Japan"), ("gdp", "4213")]);
    /// assert_eq!(record.get("country"), Some("Japan"));
    /// assert_eq!(record.get("population"), None);
    /// ```
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value of the named field, if the record has it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// The record's fields in their original (header) order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Reads every row from every CSV file at `paths`, in file order then
/// row order, and returns them as one merged sequence of records.
///
/// Each file is expected to start with a header row naming its fields.
/// Files need not share a header: records from different files are
/// concatenated as-is, and a consumer requiring a field a file lacks will
/// find it unset.
///
/// A path that does not exist, or a file that cannot be opened, decoded, or
/// parsed, is skipped with a one-line warning on stderr; rows already read
/// from a failing file are discarded rather than half-included. No input
/// file can abort the batch, so this function is infallible — an empty
/// result is for the caller to judge.
pub fn read_csv_files(paths: &[impl AsRef<Path>]) -> Vec<Record> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            eprintln!("warning: file {} does not exist, skipping", path.display());
            continue;
        }
        match read_one(path) {
            Ok(rows) => records.extend(rows),
            Err(err) => {
                eprintln!("warning: error reading {}: {err:#}, skipping", path.display());
            }
        }
    }
    records
}

/// Parses a single CSV file into records, failing on the first faulty row.
fn read_one(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| "cannot open file")?;
    let headers = rdr.headers().context("cannot read header row")?.clone();
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(Record {
            fields: headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });
    }
    Ok(records)
}
