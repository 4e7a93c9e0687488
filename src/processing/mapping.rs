//! WooCommerce review export -> Judge.me import mapping.

use std::io;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ConvertResult;
use crate::schema::{CURATED_OK, JUDGEME_HEADERS, SOURCE_WOOCOMMERCE};
use crate::types::Table;

/// One review in Judge.me's import format.
///
/// Field order is the column order of [`JUDGEME_HEADERS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgemeReview {
    pub title: String,
    pub body: String,
    pub rating: String,
    pub review_date: String,
    pub source: String,
    pub curated: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub product_id: String,
    pub product_handle: String,
    pub reply: String,
    pub reply_date: String,
    pub picture_urls: String,
    pub ip_address: String,
    pub location: String,
}

/// Column positions of the WooCommerce fields within a table, resolved once per table.
struct WooColumns {
    body: Option<usize>,
    author: Option<usize>,
    email: Option<usize>,
    date: Option<usize>,
    product_id: Option<usize>,
    product_handle: Option<usize>,
    review_score: Option<usize>,
}

impl WooColumns {
    fn resolve(table: &Table) -> Self {
        Self {
            body: table.index_of("body"),
            author: table.index_of("author"),
            email: table.index_of("email"),
            date: table.index_of("date"),
            product_id: table.index_of("product_id"),
            product_handle: table.index_of("product_handle"),
            review_score: table.index_of("review_score"),
        }
    }
}

fn cell(table: &Table, row: usize, col: Option<usize>) -> String {
    col.map(|c| table.cell(row, c)).unwrap_or("").to_owned()
}

fn map_row(table: &Table, cols: &WooColumns, row: usize) -> JudgemeReview {
    JudgemeReview {
        body: cell(table, row, cols.body),
        rating: cell(table, row, cols.review_score),
        review_date: cell(table, row, cols.date),
        source: SOURCE_WOOCOMMERCE.to_string(),
        curated: CURATED_OK.to_string(),
        reviewer_name: cell(table, row, cols.author),
        reviewer_email: cell(table, row, cols.email),
        product_id: cell(table, row, cols.product_id),
        product_handle: cell(table, row, cols.product_handle),
        ..JudgemeReview::default()
    }
}

/// Map a single row of a WooCommerce export.
///
/// Missing columns and short rows yield empty strings; nothing here fails.
pub fn map_review(table: &Table, row: usize) -> JudgemeReview {
    map_row(table, &WooColumns::resolve(table), row)
}

/// Map every row of a WooCommerce export, preserving row order and count.
pub fn map_reviews(table: &Table) -> Vec<JudgemeReview> {
    let cols = WooColumns::resolve(table);
    (0..table.row_count()).map(|row| map_row(table, &cols, row)).collect()
}

/// Output file name for a conversion started at `at`: `judgeme_reviews_<YYYYMMDD_HHMMSS>.csv`.
pub fn judgeme_file_name(at: NaiveDateTime) -> String {
    format!("judgeme_reviews_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

/// Write the Judge.me header followed by `reviews`, then flush.
pub fn write_judgeme_reviews<W: io::Write>(wtr: &mut csv::Writer<W>, reviews: &[JudgemeReview]) -> ConvertResult<()> {
    wtr.write_record(JUDGEME_HEADERS)?;
    for review in reviews {
        wtr.serialize(review)?;
    }
    wtr.flush()?;
    Ok(())
}
