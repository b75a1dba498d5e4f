//! Duplicate row detection.

use std::collections::HashSet;

use tracing::debug;

use crate::data::{Table, Value};

/// Returns `true` if any full row appears more than once in the table.
///
/// Rows are compared on every column, anywhere in the table (not only
/// adjacent rows). Nulls in the same position compare equal. Rows are
/// hashed into a set in a single pass, stopping at the first repeat.
pub fn has_duplicates(table: &Table) -> bool {
    let mut seen: HashSet<Vec<&Value>> = HashSet::with_capacity(table.row_count());
    for (index, row) in table.rows().enumerate() {
        if !seen.insert(row) {
            debug!(row = index, "first repeated row");
            return true;
        }
    }
    false
}
