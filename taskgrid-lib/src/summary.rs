//! Summary stage: aggregate statistics derived from the row collection.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// The derived aggregate row shown under the grid.
///
/// Not part of the canonical store: recomputed whenever the row
/// collection changes, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Number of rows in the collection.
    pub total_count: usize,
    /// Number of rows whose `available` flag is set.
    pub yes_count: usize,
}

impl SummaryRow {
    /// Share of available rows as a whole percentage, floored.
    ///
    /// An empty collection reads as 0%, never a division error.
    pub fn percent_available(&self) -> u8 {
        if self.total_count == 0 {
            return 0;
        }
        (100 * self.yes_count / self.total_count) as u8
    }
}

/// Scans `rows` and derives the summary row.
pub fn summarize(rows: &[Record]) -> SummaryRow {
    SummaryRow {
        total_count: rows.len(),
        yes_count: rows.iter().filter(|r| r.available).count(),
    }
}
