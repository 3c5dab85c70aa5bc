use std::fmt::{self, Display};

/// A report rendered as a bordered text table with a title line.
///
/// Columns whose every cell parses as a number are right-aligned; all other
/// columns are left-aligned. Build one with [`Table::new`] and print it via
/// its [`Display`] implementation.
#[derive(Debug)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table titled after `report_name` (hyphens become spaces,
    /// words are title-cased, " Report" is appended).
    #[must_use]
    pub fn new(report_name: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: format!("{} Report", title_case(report_name)),
            headers: headers.iter().map(ToString::to_string).collect(),
            rows,
        }
    }

    fn cell<'a>(&'a self, row: &'a [String], col: usize) -> &'a str {
        row.get(col).map_or("", String::as_str)
    }

    fn column_width(&self, col: usize) -> usize {
        self.rows
            .iter()
            .map(|row| self.cell(row, col).len())
            .chain([self.headers[col].len()])
            .max()
            .unwrap_or(0)
    }

    fn column_is_numeric(&self, col: usize) -> bool {
        !self.rows.is_empty()
            && self
                .rows
                .iter()
                .all(|row| self.cell(row, col).parse::<f64>().is_ok())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No data to display");
        }
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| self.column_width(col))
            .collect();
        let numeric: Vec<bool> = (0..self.headers.len())
            .map(|col| self.column_is_numeric(col))
            .collect();

        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:=<50}", "")?;
        write_border(f, &widths, '-')?;
        write_cells(f, &self.headers, &widths, &numeric)?;
        write_border(f, &widths, '=')?;
        for row in &self.rows {
            write_cells(f, row, &widths, &numeric)?;
            write_border(f, &widths, '-')?;
        }
        Ok(())
    }
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", fill.to_string().repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize],
    numeric: &[bool],
) -> fmt::Result {
    for (col, &width) in widths.iter().enumerate() {
        let cell = cells.get(col).map_or("", S::as_ref);
        if numeric[col] {
            write!(f, "| {cell:>width$} ")?;
        } else {
            write!(f, "| {cell:<width$} ")?;
        }
    }
    writeln!(f, "|")
}

/// Replaces hyphens with spaces and capitalises each word.
fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_renders_bordered_grid_with_title_and_aligned_columns() {
        let rows = vec![
            vec!["United States".to_string(), "24388.50".to_string()],
            vec!["China".to_string(), "17848.50".to_string()],
            vec!["Germany".to_string(), "4086.00".to_string()],
        ];
        let table = Table::new("average-gdp", &["country", "average_gdp"], rows);
        let want = "\n\
            Average Gdp Report\n\
            ==================================================\n\
            +---------------+-------------+\n\
            | country       | average_gdp |\n\
            +===============+=============+\n\
            | United States |    24388.50 |\n\
            +---------------+-------------+\n\
            | China         |    17848.50 |\n\
            +---------------+-------------+\n\
            | Germany       |     4086.00 |\n\
            +---------------+-------------+\n";
        assert_eq!(table.to_string(), want);
    }

    #[test]
    fn table_prints_notice_instead_of_grid_when_empty() {
        let table = Table::new("average-gdp", &["country", "average_gdp"], Vec::new());
        assert_eq!(table.to_string(), "No data to display\n");
    }

    #[test]
    fn table_left_aligns_columns_with_any_non_numeric_cell() {
        let rows = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "xx".to_string()],
        ];
        let table = Table::new("demo", &["k", "v"], rows);
        assert!(table.to_string().contains("| 1  |"), "expected left-aligned cell");
    }

    #[test]
    fn table_right_aligns_fully_numeric_columns() {
        let rows = vec![
            vec!["a".to_string(), "5".to_string()],
            vec!["b".to_string(), "10".to_string()],
        ];
        let table = Table::new("demo", &["k", "v"], rows);
        assert!(table.to_string().contains("|  5 |"), "expected right-aligned cell");
    }

    #[test]
    fn title_case_fn_splits_on_hyphens_and_capitalises() {
        assert_eq!(title_case("average-gdp"), "Average Gdp");
        assert_eq!(title_case("gdp"), "Gdp");
    }
}
