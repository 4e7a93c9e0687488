//! `review-csv-tools` reshapes review CSV exports so they can be imported into Judge.me.
//!
//! Three independent utilities share this library, each shipped as a binary:
//!
//! - **`woo-to-judgeme`** ([`commands::convert`]): maps a WooCommerce review export onto the
//!   15-column Judge.me import schema, filling the columns WooCommerce has no data for.
//! - **`rearrange-csv-headers`** ([`commands::rearrange`]): converts every header to snake case and
//!   moves the known review columns to the front in canonical order.
//! - **`split-csv`** ([`commands::split`]): splits a large file into `<start>-<end>-reviews.csv`
//!   chunks of at most 850 rows for incremental upload.
//!
//! The transformations themselves live in [`processing`] and work on in-memory values, so they
//! can be tested without touching the filesystem.
//!
//! ## Quick example: map WooCommerce rows
//!
//! ```rust
//! use review_csv_tools::processing::map_reviews;
//! use review_csv_tools::types::Table;
//!
//! let woo = Table::from_strs(
//!     &["body", "author", "review_score"],
//!     &[&["Great shampoo", "Ada", "5"]],
//! );
//! let reviews = map_reviews(&woo);
//!
//! assert_eq!(reviews[0].reviewer_name, "Ada");
//! assert_eq!(reviews[0].rating, "5");
//! assert_eq!(reviews[0].source, "WooCommerce");
//! assert_eq!(reviews[0].curated, "ok");
//! ```
//!
//! ## Modules
//!
//! - [`commands`]: file-level entrypoints with options, reports and observer hooks
//! - [`processing`]: mapping, header normalization and chunking
//! - [`ingestion`]: CSV reading and run observability
//! - [`export`]: CSV writing
//! - [`schema`]: the hardcoded field sets
//! - [`types`]: the in-memory [`types::Table`]
//! - [`error`]: the shared error type

pub mod commands;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod logging;
pub mod processing;
pub mod schema;
pub mod types;

pub use error::{ConvertError, ConvertResult};
