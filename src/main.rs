use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use econrep::{read_csv_files, report, Catalog, GroupAverage, ReportError, Table};

/// Generate macroeconomic reports from CSV files.
#[derive(Parser)]
#[command(name = "econrep", version, about)]
struct Cli {
    /// Paths to CSV files with economic data
    #[arg(long, required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Name of the report to generate
    #[arg(long)]
    report: String,
}

fn main() {
    if let Err(err) = run(&Cli::parse()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = Catalog::new();
    // Validate the report name before touching any file.
    let generate = catalog.lookup(&cli.report)?;
    let records = read_csv_files(&cli.files);
    if records.is_empty() {
        return Err(ReportError::NoData.into());
    }
    let results = generate(&records)?;
    let rows = results.iter().map(GroupAverage::cells).collect();
    print!("{}", Table::new(&cli.report, &report::COLUMNS, rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(files: &[&str], report: &str) -> Cli {
        Cli {
            files: files.iter().map(PathBuf::from).collect(),
            report: report.to_string(),
        }
    }

    #[test]
    fn run_fn_fails_with_no_data_when_no_file_yields_records() {
        let err = run(&cli(&["testdata/no_such_file.csv"], "average-gdp")).unwrap_err();
        assert_eq!(err.downcast_ref::<ReportError>(), Some(&ReportError::NoData));
    }

    #[test]
    fn run_fn_rejects_unknown_report_before_reading_files() {
        let err = run(&cli(&["testdata/no_such_file.csv"], "median-gdp")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::UnknownReport { .. })
        ));
    }

    #[test]
    fn run_fn_succeeds_on_well_formed_input() {
        run(&cli(&["testdata/economies.csv"], "average-gdp")).unwrap();
    }
}
