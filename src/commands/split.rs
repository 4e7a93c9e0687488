//! Chunked split run.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::ingestion::csv::open_csv_reader;
use crate::ingestion::observability::{RunContext, RunReporter, RunStats, Tool};
use crate::processing::chunk::{split_records, DirectorySink, DEFAULT_CHUNK_SIZE};

/// Input file read when no other path is given, relative to the base directory.
pub const DEFAULT_SPLIT_INPUT: &str = "nutrix_final.csv";

/// Output directory used when no other path is given, relative to the base directory.
pub const DEFAULT_SPLIT_OUTPUT_DIR: &str = "../reviews/nutrix";

/// Options controlling a split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Directory `input` and `output_dir` are resolved against. Empty means the working directory.
    pub base_dir: PathBuf,
    /// CSV to split.
    pub input: PathBuf,
    /// Existing directory the chunk files are written into.
    pub output_dir: PathBuf,
    /// Maximum data rows per output file.
    pub chunk_size: usize,
    /// Where the run outcome is reported. The default reports nowhere.
    pub reporter: RunReporter,
}

impl SplitOptions {
    /// `input` resolved against `base_dir`.
    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(&self.input)
    }

    /// `output_dir` resolved against `base_dir`.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir)
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            input: PathBuf::from(DEFAULT_SPLIT_INPUT),
            output_dir: PathBuf::from(DEFAULT_SPLIT_OUTPUT_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            reporter: RunReporter::default(),
        }
    }
}

/// Outcome of a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// File that was read.
    pub input: PathBuf,
    /// Directory the chunks were written to.
    pub output_dir: PathBuf,
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Files written, in row order.
    pub files: Vec<PathBuf>,
}

/// Split the input CSV into `<start>-<end>-reviews.csv` files of at most `chunk_size` rows.
///
/// `on_created(path, rows)` is called after each file is written. An input with only a header
/// produces no files.
pub fn split_file(options: &SplitOptions, on_created: impl FnMut(&Path, usize)) -> ConvertResult<SplitReport> {
    let input = options.input_path();
    let ctx = RunContext {
        tool: Tool::SplitCsv,
        input: input.clone(),
    };

    let result = run(&input, options, on_created);

    options.reporter.report(&ctx, &result, |r| RunStats {
        rows_read: r.rows,
        rows_written: r.rows,
        files_written: r.files.len(),
    });

    result
}

fn run(input: &Path, options: &SplitOptions, on_created: impl FnMut(&Path, usize)) -> ConvertResult<SplitReport> {
    let output_dir = options.output_path();
    let mut rdr = open_csv_reader(input)?;
    let mut sink = DirectorySink::new(&output_dir).on_created(on_created);

    let summary = split_records(&mut rdr, options.chunk_size, &mut sink).map_err(|e| match e {
        ConvertError::EmptyHeaders { .. } => ConvertError::EmptyHeaders {
            path: input.to_path_buf(),
        },
        other => other,
    })?;
    tracing::debug!(rows = summary.rows, chunks = summary.chunks.len(), "split finished");

    Ok(SplitReport {
        input: input.to_path_buf(),
        output_dir,
        rows: summary.rows,
        files: sink.into_written(),
    })
}
