//! WooCommerce -> Judge.me conversion run.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{ConvertError, ConvertResult};
use crate::export::create_csv_writer;
use crate::ingestion::csv::read_table_from_path;
use crate::ingestion::observability::{RunContext, RunReporter, RunStats, Tool};
use crate::processing::mapping::{judgeme_file_name, map_reviews, write_judgeme_reviews, JudgemeReview};
use crate::types::Table;

/// Input file read when no other path is given.
pub const DEFAULT_WOO_INPUT: &str = "woocommerce_reviews.csv";

/// Options controlling a conversion run.
///
/// Use [`Default`] for the standard layout: read `woocommerce_reviews.csv` from the working
/// directory and write `judgeme_reviews_<timestamp>.csv` next to it.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// WooCommerce export to read.
    pub input: PathBuf,
    /// Directory the Judge.me file is written to. Empty means the working directory.
    pub output_dir: PathBuf,
    /// Timestamp embedded in the output name. `None` uses the local time at the start of the run.
    pub started_at: Option<NaiveDateTime>,
    /// Where the run outcome is reported. The default reports nowhere.
    pub reporter: RunReporter,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_WOO_INPUT),
            output_dir: PathBuf::new(),
            started_at: None,
            reporter: RunReporter::default(),
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Reviews converted (equal to the input's data row count).
    pub rows: usize,
}

/// Convert a WooCommerce review export into a Judge.me import file.
///
/// The input is read completely before the output file is created, so a missing input leaves no
/// empty output behind. An empty input file converts to a file holding only the Judge.me header.
///
/// ```no_run
/// use review_csv_tools::commands::convert::{convert_reviews, ConvertOptions};
///
/// # fn main() -> Result<(), review_csv_tools::ConvertError> {
/// let report = convert_reviews(&ConvertOptions::default())?;
/// println!("converted {} reviews into {}", report.rows, report.output.display());
/// # Ok(())
/// # }
/// ```
pub fn convert_reviews(options: &ConvertOptions) -> ConvertResult<ConvertReport> {
    let ctx = RunContext {
        tool: Tool::ConvertReviews,
        input: options.input.clone(),
    };

    let result = run(options);

    options.reporter.report(&ctx, &result, |r| RunStats {
        rows_read: r.rows,
        rows_written: r.rows,
        files_written: 1,
    });

    result
}

fn run(options: &ConvertOptions) -> ConvertResult<ConvertReport> {
    let started_at = options.started_at.unwrap_or_else(|| Local::now().naive_local());
    let output = options.output_dir.join(judgeme_file_name(started_at));

    let table = match read_table_from_path(&options.input) {
        Ok(table) => table,
        // A zero-byte export has no rows to convert; it still yields a header-only import file.
        Err(ConvertError::EmptyHeaders { .. }) => Table::default(),
        Err(e) => return Err(e),
    };
    let reviews = map_reviews(&table);
    tracing::debug!(input = %options.input.display(), rows = reviews.len(), "mapped woocommerce rows");

    write_output(&output, &reviews).map_err(|e| e.writing(&output))?;

    Ok(ConvertReport {
        input: options.input.clone(),
        output,
        rows: reviews.len(),
    })
}

fn write_output(path: &Path, reviews: &[JudgemeReview]) -> ConvertResult<()> {
    let mut wtr = create_csv_writer(path)?;
    write_judgeme_reviews(&mut wtr, reviews)
}
