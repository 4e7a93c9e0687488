//! `tracing` setup shared by the binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used (`"warn"` keeps the operator
/// summaries on stdout uncluttered, `"debug"` shows per-chunk events). Calling this twice is a no-op.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Directive for a `-v` count: 0 -> `warn`, 1 -> `info`, 2+ -> `debug`.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
