//! CSV writing.
//!
//! All utilities write UTF-8, comma-delimited files with CRLF record terminators and minimal
//! quoting, matching the spreadsheet dialect the review platforms import.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::ConvertResult;
use crate::types::Table;

/// The writer settings shared by every utility.
///
/// Headers are always written explicitly so that an empty table still gets its header row.
pub fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::CRLF);
    builder
}

/// Create (or truncate) `path` and return a CSV writer for it.
pub fn create_csv_writer(path: impl AsRef<Path>) -> ConvertResult<csv::Writer<File>> {
    let file = File::create(path)?;
    Ok(writer_builder().from_writer(file))
}

/// Write `table` (header first) to an existing CSV writer and flush it.
pub fn write_table_to_writer<W: io::Write>(wtr: &mut csv::Writer<W>, table: &Table) -> ConvertResult<()> {
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file.
pub fn write_table_to_path(path: impl AsRef<Path>, table: &Table) -> ConvertResult<()> {
    let mut wtr = create_csv_writer(path)?;
    write_table_to_writer(&mut wtr, table)
}
