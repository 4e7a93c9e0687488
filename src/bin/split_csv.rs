//! Split a review CSV into `<start>-<end>-reviews.csv` chunks for incremental upload.
//!
//! ```bash
//! split-csv                          # ./nutrix_final.csv -> ../reviews/nutrix/
//! split-csv --base-dir scripts --chunk-size 500
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use review_csv_tools::commands::split::{split_file, SplitOptions, DEFAULT_SPLIT_INPUT, DEFAULT_SPLIT_OUTPUT_DIR};
use review_csv_tools::ingestion::RunReporter;
use review_csv_tools::logging;
use review_csv_tools::processing::DEFAULT_CHUNK_SIZE;

#[derive(Debug, Parser)]
#[command(name = "split-csv", about = "Split a CSV into fixed-size chunks, repeating the header in each")]
struct Cli {
    /// Directory the input and output paths are relative to (defaults to the working directory).
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// CSV to split.
    #[arg(long, default_value = DEFAULT_SPLIT_INPUT)]
    input: PathBuf,

    /// Existing directory the chunk files are written into.
    #[arg(long, default_value = DEFAULT_SPLIT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Maximum data rows per output file.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Append a JSON line per run outcome to this file.
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::directive_for_verbosity(cli.verbose));

    let options = SplitOptions {
        base_dir: cli.base_dir.unwrap_or_default(),
        input: cli.input,
        output_dir: cli.output_dir,
        chunk_size: cli.chunk_size,
        reporter: RunReporter::for_cli(cli.event_log.as_deref()),
        ..Default::default()
    };

    let report = split_file(&options, |path, rows| {
        println!("Created: {} ({} entries)", path.display(), rows);
    })
    .with_context(|| format!("splitting {}", options.input_path().display()))?;

    println!("\nTotal files created: {}", report.files.len());
    Ok(())
}
