//! Normalize CSV headers to snake case and move the known review columns to the front.
//!
//! ```bash
//! rearrange-csv-headers reviews.csv                   # writes reviews_reordered.csv
//! rearrange-csv-headers reviews.csv reviews_out.csv
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use review_csv_tools::commands::rearrange::{rearrange_headers, RearrangeOptions, RearrangeReport};
use review_csv_tools::ingestion::RunReporter;
use review_csv_tools::{logging, ConvertError};

#[derive(Debug, Parser)]
#[command(
    name = "rearrange-csv-headers",
    about = "Rearrange CSV headers in the canonical review order",
    after_help = "Example:\n  rearrange-csv-headers reviews.csv\n  \
                  rearrange-csv-headers reviews.csv reviews_reordered.csv"
)]
struct Cli {
    /// CSV whose headers should be rearranged.
    input_file: PathBuf,

    /// Output path (defaults to `<input_stem>_reordered<ext>` next to the input).
    output_file: Option<PathBuf>,

    /// Append a JSON line per run outcome to this file.
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };
    logging::init(logging::directive_for_verbosity(cli.verbose));

    let options = RearrangeOptions {
        output: cli.output_file.clone(),
        reporter: RunReporter::for_cli(cli.event_log.as_deref()),
        ..Default::default()
    };

    match rearrange_headers(&cli.input_file, &options) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", failure_message(&e));
            ExitCode::from(1)
        }
    }
}

fn print_report(report: &RearrangeReport) {
    println!("✓ Successfully reordered CSV headers");
    println!("  Input:  {}", report.input.display());
    println!("  Output: {}", report.output.display());
    println!("\nOriginal headers: {}", report.original_headers);
    println!("New headers:      {}", report.new_headers);

    if !report.appended.is_empty() {
        println!("\nHeaders appended at the end (not in predefined order):");
        for h in &report.appended {
            println!("  - {h}");
        }
    }
}

fn failure_message(e: &ConvertError) -> String {
    match e {
        ConvertError::NotFound { path } => format!("Error: File '{}' not found.", path.display()),
        ConvertError::EmptyHeaders { .. } => "Error: CSV file has no headers.".to_string(),
        ConvertError::Write { source, .. } => format!("Error writing file: {source}"),
        other => format!("Error reading file: {other}"),
    }
}
