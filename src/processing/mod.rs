//! Pure transformations behind the three utilities.
//!
//! Nothing here touches the filesystem except [`chunk::DirectorySink`]; the command layer in
//! [`crate::commands`] does the reading and writing.
//!
//! - [`mapping`]: WooCommerce export rows -> Judge.me import records
//! - [`headers`]: snake-case header normalization and canonical reordering
//! - [`chunk`]: fixed-size chunking of data rows
//!
//! ## Example: reorder headers
//!
//! ```rust
//! use review_csv_tools::processing::headers::reorder_table;
//! use review_csv_tools::types::Table;
//!
//! let table = Table::from_strs(&["Zeta", "Body", "Title"], &[&["z", "b", "t"]]);
//! let (out, plan) = reorder_table(&table);
//!
//! assert_eq!(out.headers, vec!["title", "body", "zeta"]);
//! assert_eq!(out.rows[0], vec!["t", "b", "z"]);
//! assert_eq!(plan.appended, vec!["zeta"]);
//! ```

pub mod chunk;
pub mod headers;
pub mod mapping;

pub use chunk::{plan_chunks, split_records, ChunkRange, ChunkSink, DirectorySink, SplitSummary, DEFAULT_CHUNK_SIZE};
pub use headers::{plan_header_order, reorder_table, to_snake_case, HeaderPlan};
pub use mapping::{judgeme_file_name, map_review, map_reviews, write_judgeme_reviews, JudgemeReview};
