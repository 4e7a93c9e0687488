//! CSV reading.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::types::Table;

/// Open a CSV file for record-by-record reading.
///
/// The reader expects a header row and accepts rows of any length. A missing file is reported as
/// [`ConvertError::NotFound`] rather than a bare I/O error.
pub fn open_csv_reader(path: impl AsRef<Path>) -> ConvertResult<csv::Reader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::Io(e),
    })?;
    Ok(reader_builder().from_reader(file))
}

/// Read a whole CSV file into a [`Table`].
///
/// Rules:
///
/// - The file must have a non-empty header row.
/// - Rows may be shorter or longer than the header; they are kept as-is.
/// - Cell values are not trimmed or otherwise altered.
pub fn read_table_from_path(path: impl AsRef<Path>) -> ConvertResult<Table> {
    let path = path.as_ref();
    let mut rdr = open_csv_reader(path)?;
    read_table_from_reader(&mut rdr).map_err(|e| match e {
        ConvertError::EmptyHeaders { .. } => ConvertError::EmptyHeaders {
            path: path.to_path_buf(),
        },
        other => other,
    })
}

/// Read CSV data from an existing CSV reader into a [`Table`].
///
/// Errors with [`ConvertError::EmptyHeaders`] (with an empty path) when the input has no header.
pub fn read_table_from_reader<R: io::Read>(rdr: &mut csv::Reader<R>) -> ConvertResult<Table> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if headers.is_empty() {
        return Err(ConvertError::EmptyHeaders {
            path: Default::default(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Table::new(headers, rows))
}

/// The reader settings shared by every utility.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

#[cfg(test)]
mod tests {
    use super::{read_table_from_reader, reader_builder};
    use crate::error::ConvertError;

    #[test]
    fn keeps_ragged_rows_and_untrimmed_values() {
        let input = "a,b,c\n 1 ,2\n3,4,5,6\n";
        let mut rdr = reader_builder().from_reader(input.as_bytes());
        let table = read_table_from_reader(&mut rdr).unwrap();

        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0], vec![" 1 ", "2"]);
        assert_eq!(table.rows[1], vec!["3", "4", "5", "6"]);
    }

    #[test]
    fn empty_input_has_no_headers() {
        let mut rdr = reader_builder().from_reader("".as_bytes());
        let err = read_table_from_reader(&mut rdr).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyHeaders { .. }));
    }

    #[test]
    fn quoted_fields_with_commas_and_newlines_survive() {
        let input = "body,author\n\"Great, really\nGreat\",Ada\n";
        let mut rdr = reader_builder().from_reader(input.as_bytes());
        let table = read_table_from_reader(&mut rdr).unwrap();
        assert_eq!(table.rows[0][0], "Great, really\nGreat");
        assert_eq!(table.rows[0][1], "Ada");
    }
}
