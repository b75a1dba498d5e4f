//! Sorted, width-bounded listing of a column's distinct values.
//!
//! The listing renders as `(v1, v2, ..., vk[, ...]) (N values)`:
//!
//! - values are the column's distinct values in [`Value`] order, so a null
//!   (rendered `None`) always comes first
//! - values are accepted greedily while the comma-space-joined list stays
//!   within the line width; the first value that does not fit is replaced
//!   by `...` and nothing after it is tried
//! - `N` is the total number of distinct values, not the number shown

use std::collections::BTreeSet;

use crate::data::{Column, Value};
use crate::options::clamp_line_width;

const SEPARATOR: &str = ", ";
const ELLIPSIS: &str = "...";

/// Distinct values of a column, sorted null-first.
pub fn distinct_values(column: &Column) -> Vec<&Value> {
    column
        .values()
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Render the distinct-value line for a column.
///
/// `line_width` below the 80 column floor is raised to 80.
pub fn format_distinct(column: &Column, line_width: usize) -> String {
    let values = distinct_values(column);
    let total = values.len();
    let shown = fit_to_width(
        values.iter().map(|v| v.to_string()),
        clamp_line_width(line_width),
    );
    format!("({}) ({} values)", shown.join(SEPARATOR), total)
}

/// Greedily accept rendered values while the joined length fits `width`.
///
/// The first value is always accepted. Lengths are counted in characters.
fn fit_to_width(rendered: impl Iterator<Item = String>, width: usize) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::new();
    // Character length of `accepted.join(SEPARATOR)`
    let mut joined_len = 0;

    for text in rendered {
        let len = text.chars().count();
        if accepted.is_empty() {
            joined_len = len;
            accepted.push(text);
            continue;
        }
        let candidate_len = joined_len + SEPARATOR.len() + len;
        if candidate_len <= width {
            joined_len = candidate_len;
            accepted.push(text);
        } else {
            accepted.push(ELLIPSIS.to_string());
            break;
        }
    }

    accepted
}
