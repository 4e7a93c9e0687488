//! Header normalization and canonical reordering.
//!
//! Headers are converted to snake case with [`to_snake_case`], then placed in the order given by
//! [`crate::schema::PREFERRED_ORDER`]. Columns the preferred order does not know about keep their
//! original relative order at the end of the header.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::PREFERRED_ORDER;
use crate::types::Table;

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
static LOWER_THEN_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").expect("valid regex"));

/// Convert a header name to lowercase snake case.
///
/// ```rust
/// use review_csv_tools::processing::headers::to_snake_case;
///
/// assert_eq!(to_snake_case("Review Score"), "review_score");
/// assert_eq!(to_snake_case("camelCase"), "camel_case");
/// assert_eq!(to_snake_case("multi--hyphen"), "multi_hyphen");
/// ```
pub fn to_snake_case(text: &str) -> String {
    let text = text.trim().replace([' ', '-'], "_");
    let text = CAPITALIZED_WORD.replace_all(&text, "${1}_${2}");
    let text = LOWER_THEN_UPPER.replace_all(&text, "${1}_${2}");
    let text = UNDERSCORE_RUN.replace_all(&text, "_");
    text.to_lowercase()
}

/// Result of planning a header reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    /// Output headers, normalized, in output order.
    pub headers: Vec<String>,
    /// For each output column, the input column its values come from.
    pub sources: Vec<usize>,
    /// Normalized names of the columns that were not in the preferred order, in output order.
    pub appended: Vec<String>,
}

/// Plan the output header order for `original` headers.
///
/// When several original headers normalize to the same name, the last of them supplies the
/// values for every output column of that name.
pub fn plan_header_order<S: AsRef<str>>(original: &[S]) -> HeaderPlan {
    let normalized: Vec<String> = original.iter().map(|h| to_snake_case(h.as_ref())).collect();
    let last_with_name = |name: &str| normalized.iter().rposition(|n| n == name);

    let mut headers = Vec::with_capacity(original.len());
    let mut sources = Vec::with_capacity(original.len());
    let mut matched = vec![false; original.len()];

    for preferred in PREFERRED_ORDER {
        if let Some(idx) = last_with_name(preferred) {
            headers.push(normalized[idx].clone());
            sources.push(idx);
            // Matching is by original spelling; identical duplicates are all consumed here.
            for (i, h) in original.iter().enumerate() {
                if h.as_ref() == original[idx].as_ref() {
                    matched[i] = true;
                }
            }
        }
    }

    let mut appended = Vec::new();
    for (i, name) in normalized.iter().enumerate() {
        if matched[i] {
            continue;
        }
        headers.push(name.clone());
        appended.push(name.clone());
        // `last_with_name` always finds at least `i` itself.
        sources.push(last_with_name(name.as_str()).unwrap_or(i));
    }

    HeaderPlan {
        headers,
        sources,
        appended,
    }
}

impl HeaderPlan {
    /// Rekey a single row according to the plan. Values are copied unchanged; short rows are
    /// padded with empty strings and surplus cells are dropped.
    pub fn apply_row(&self, row: &[String]) -> Vec<String> {
        self.sources
            .iter()
            .map(|&src| row.get(src).cloned().unwrap_or_default())
            .collect()
    }
}

/// Normalize and reorder the headers of `table`, rekeying every row.
pub fn reorder_table(table: &Table) -> (Table, HeaderPlan) {
    let plan = plan_header_order(&table.headers);
    let rows = table.rows.iter().map(|row| plan.apply_row(row)).collect();
    (Table::new(plan.headers.clone(), rows), plan)
}
