//! Edit stage: merges a patch over a contiguous row range.

use crate::error::EditError;
use crate::model::Record;
use crate::model::RecordPatch;

/// Applies `patch` to every row in the inclusive range `[from, to]` and
/// returns the resulting collection.
///
/// Rows outside the range are carried over unchanged. The range is
/// validated up front: `from > to` or `to >= rows.len()` is rejected
/// with [`EditError::InvalidRange`] and `rows` is left untouched.
pub fn apply_edit(
    rows: &[Record],
    from: usize,
    to: usize,
    patch: &RecordPatch,
) -> Result<Vec<Record>, EditError> {
    if from > to || to >= rows.len() {
        return Err(EditError::invalid_range(from, to, rows.len()));
    }

    let mut updated = rows.to_vec();
    for row in &mut updated[from..=to] {
        patch.apply(row);
    }
    Ok(updated)
}
