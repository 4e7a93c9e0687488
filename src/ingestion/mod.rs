//! Input handling and run observability.
//!
//! - [`csv`]: reading CSV files into a [`crate::types::Table`] or a streaming reader
//! - [`observability`]: observer hooks that report run outcomes (`tracing` events, JSON-lines file)

pub mod csv;
pub mod observability;

pub use observability::{
    FileObserver, RunContext, RunObserver, RunReporter, RunSeverity, RunStats, Tool, TracingObserver,
};
