//! Header normalization run.

use std::path::{Path, PathBuf};

use crate::error::ConvertResult;
use crate::export::write_table_to_path;
use crate::ingestion::csv::read_table_from_path;
use crate::ingestion::observability::{RunContext, RunReporter, RunStats, Tool};
use crate::processing::headers::reorder_table;

/// Options controlling a header rearrangement run.
#[derive(Debug, Clone, Default)]
pub struct RearrangeOptions {
    /// Output path. `None` writes `<stem>_reordered<ext>` next to the input.
    pub output: Option<PathBuf>,
    /// Where the run outcome is reported. The default reports nowhere.
    pub reporter: RunReporter,
}

/// Outcome of a successful rearrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RearrangeReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Header count of the input.
    pub original_headers: usize,
    /// Header count of the output (always equal to `original_headers`).
    pub new_headers: usize,
    /// Columns that were not in the preferred order and went to the end.
    pub appended: Vec<String>,
    /// Data rows written.
    pub rows: usize,
}

/// `<stem>_reordered<ext>` in the input's directory.
///
/// ```rust
/// use std::path::Path;
/// use review_csv_tools::commands::rearrange::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("exports/reviews.csv")),
///     Path::new("exports/reviews_reordered.csv")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push("_reordered");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Normalize the headers of `input` to snake case, reorder them, and write the result.
///
/// Fails with [`crate::ConvertError::NotFound`] for a missing input,
/// [`crate::ConvertError::EmptyHeaders`] for an input without a header row, and
/// [`crate::ConvertError::Write`] when the output cannot be written.
pub fn rearrange_headers(input: impl AsRef<Path>, options: &RearrangeOptions) -> ConvertResult<RearrangeReport> {
    let input = input.as_ref();
    let ctx = RunContext {
        tool: Tool::RearrangeHeaders,
        input: input.to_path_buf(),
    };

    let result = run(input, options);

    options.reporter.report(&ctx, &result, |r| RunStats {
        rows_read: r.rows,
        rows_written: r.rows,
        files_written: 1,
    });

    result
}

fn run(input: &Path, options: &RearrangeOptions) -> ConvertResult<RearrangeReport> {
    let table = read_table_from_path(input)?;
    let (reordered, plan) = reorder_table(&table);
    if !plan.appended.is_empty() {
        tracing::debug!(appended = ?plan.appended, "headers outside the preferred order");
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    write_table_to_path(&output, &reordered).map_err(|e| e.writing(&output))?;

    Ok(RearrangeReport {
        input: input.to_path_buf(),
        output,
        original_headers: table.headers.len(),
        new_headers: reordered.headers.len(),
        appended: plan.appended,
        rows: reordered.row_count(),
    })
}
