//! Core data model for the conversion utilities.
//!
//! Every utility works on a [`Table`]: an ordered header plus text rows. Cells are never typed;
//! review exports are copied through as the strings they arrived as.

/// In-memory tabular data read from a CSV file.
///
/// Rows are stored row-major in header order. Rows are allowed to be shorter or longer than the
/// header; accessors substitute an empty string for missing cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Create a table from string slices. Mostly useful in tests.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by exact name, if present.
    ///
    /// When a name appears more than once the last occurrence wins, matching how a keyed record
    /// built from the row would resolve it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }

    /// Cell at (`row`, `col`), or `""` when the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cell at `row` under column `name`, or `""` when the column or the cell is missing.
    pub fn get(&self, row: usize, name: &str) -> &str {
        match self.index_of(name) {
            Some(col) => self.cell(row, col),
            None => "",
        }
    }
}
