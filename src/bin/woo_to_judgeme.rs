//! Convert a WooCommerce review export into Judge.me's import format.
//!
//! ```bash
//! woo-to-judgeme                     # reads ./woocommerce_reviews.csv
//! woo-to-judgeme --input export.csv --output-dir out/
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use review_csv_tools::commands::convert::{convert_reviews, ConvertOptions, DEFAULT_WOO_INPUT};
use review_csv_tools::ingestion::RunReporter;
use review_csv_tools::logging;

#[derive(Debug, Parser)]
#[command(name = "woo-to-judgeme", about = "Convert WooCommerce reviews CSV to Judge.me format")]
struct Cli {
    /// WooCommerce export to read.
    #[arg(long, default_value = DEFAULT_WOO_INPUT)]
    input: PathBuf,

    /// Directory for `judgeme_reviews_<timestamp>.csv` (defaults to the working directory).
    #[arg(long)]
    output_dir: Option<PathBuf>,

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

    let options = ConvertOptions {
        input: cli.input.clone(),
        output_dir: cli.output_dir.unwrap_or_default(),
        reporter: RunReporter::for_cli(cli.event_log.as_deref()),
        ..Default::default()
    };

    println!("Converting {} to Judge.me format...", options.input.display());
    let report = convert_reviews(&options)
        .with_context(|| format!("converting {}", options.input.display()))?;

    println!("✅ Conversion complete!");
    println!("   Converted {} reviews", report.rows);
    println!("   Output file: {}", report.output.display());
    Ok(())
}
