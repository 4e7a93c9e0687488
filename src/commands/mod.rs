//! File-level entrypoints for the three utilities.
//!
//! Each command reads its input, runs the matching [`crate::processing`] transformation, writes
//! the output, and reports the outcome to an optional
//! [`crate::ingestion::observability::RunObserver`]:
//!
//! - `on_success` with row/file counts
//! - `on_failure` with a computed severity (I/O problems are `Critical`, everything else `Error`)
//! - `on_alert` when that severity is at or above the configured threshold

pub mod convert;
pub mod rearrange;
pub mod split;

pub use convert::{convert_reviews, ConvertOptions, ConvertReport};
pub use rearrange::{default_output_path, rearrange_headers, RearrangeOptions, RearrangeReport};
pub use split::{split_file, SplitOptions, SplitReport};
