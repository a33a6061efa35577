//! Grid state container.
//!
//! Owns the canonical row collection, the active sort selector, and the
//! selection set, and handles the three intents raised by the grid
//! widget: sort requests, range edits, and selection changes.

use std::collections::HashSet;

use log::debug;
use log::warn;

use crate::edit;
use crate::error::EditError;
use crate::model::Record;
use crate::model::RecordPatch;
use crate::sort::Direction;
use crate::sort::sort_rows;
use crate::summary::SummaryRow;
use crate::summary::summarize;

/// The coordinating state behind the grid widget.
///
/// Downstream stages receive snapshots and return new collections; the
/// store is replaced wholesale, never partially mutated in place.
#[derive(Debug, Clone)]
pub struct GridState {
    /// Canonical row collection, in stored order.
    rows: Vec<Record>,
    /// Active sort column id.
    sort_column: String,
    /// Active sort direction; `None` presents stored order.
    sort_direction: Direction,
    /// Selected record ids. Only ids present in `rows` are kept.
    selection: HashSet<u64>,
}

impl GridState {
    /// Creates a grid over an initial row collection, unsorted and with
    /// nothing selected.
    pub fn new(rows: Vec<Record>) -> Self {
        Self {
            rows,
            sort_column: "id".into(),
            sort_direction: Direction::None,
            selection: HashSet::new(),
        }
    }

    // =========================================================================
    // Canonical store
    // =========================================================================

    /// The canonical row collection, in stored order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of rows in the canonical store.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the canonical store and prunes selected ids that no
    /// longer exist.
    pub fn replace_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        let ids: HashSet<u64> = self.rows.iter().map(|r| r.id).collect();
        let before = self.selection.len();
        self.selection.retain(|id| ids.contains(id));
        if self.selection.len() != before {
            debug!(
                "pruned {} stale selected id(s) on row replacement",
                before - self.selection.len()
            );
        }
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The presented sequence: the canonical store with the active sort
    /// applied. With `Direction::None` this is the stored order.
    pub fn visible_rows(&self) -> Vec<Record> {
        sort_rows(&self.rows, &self.sort_column, self.sort_direction)
    }

    /// The aggregate row, derived from the canonical store.
    pub fn summary(&self) -> SummaryRow {
        summarize(&self.rows)
    }

    // =========================================================================
    // Sort intent
    // =========================================================================

    /// The active sort selector as `(column id, direction)`.
    pub fn sort_selector(&self) -> (&str, Direction) {
        (&self.sort_column, self.sort_direction)
    }

    /// Replaces the sort selector.
    pub fn request_sort(&mut self, column_id: impl Into<String>, direction: Direction) {
        self.sort_column = column_id.into();
        self.sort_direction = direction;
        debug!("sort set to {} {}", self.sort_column, self.sort_direction);
    }

    /// Header-activation behavior: cycles the direction on the active
    /// column, or starts ascending on a new column.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let direction = if self.sort_column == column_id {
            self.sort_direction.toggled()
        } else {
            Direction::Asc
        };
        self.request_sort(column_id, direction);
    }

    // =========================================================================
    // Edit intent
    // =========================================================================

    /// Applies `patch` to the inclusive range `[from, to]` of the
    /// *presented* sequence and makes the result the new canonical
    /// store.
    ///
    /// The range addresses whatever order is on screen, so an active
    /// sort is baked into storage at edit time. Callers that want edits
    /// independent of presentation order must resolve record ids
    /// against [`visible_rows`](Self::visible_rows) first.
    ///
    /// An invalid range is rejected and the store is left unchanged.
    pub fn apply_edit(
        &mut self,
        from: usize,
        to: usize,
        patch: &RecordPatch,
    ) -> Result<(), EditError> {
        let presented = self.visible_rows();
        match edit::apply_edit(&presented, from, to, patch) {
            Ok(updated) => {
                debug!("edited rows {from}..={to}");
                self.replace_rows(updated);
                Ok(())
            }
            Err(e) => {
                warn!("rejected edit: {e}");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Selection intent
    // =========================================================================

    /// The selected record ids.
    pub fn selection(&self) -> &HashSet<u64> {
        &self.selection
    }

    /// Returns `true` if the record id is selected.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    /// Replaces the selection set. Ids not present in the store are
    /// dropped.
    pub fn set_selection(&mut self, ids: HashSet<u64>) {
        let known: HashSet<u64> = self.rows.iter().map(|r| r.id).collect();
        self.selection = ids.into_iter().filter(|id| known.contains(id)).collect();
    }

    /// Toggles selection of a record id. Unknown ids are ignored.
    pub fn toggle_selected(&mut self, id: u64) {
        if !self.rows.iter().any(|r| r.id == id) {
            return;
        }
        if !self.selection.insert(id) {
            self.selection.remove(&id);
        }
    }

    /// Selects every row in the store.
    pub fn select_all(&mut self) {
        self.selection = self.rows.iter().map(|r| r.id).collect();
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(count: usize) -> GridState {
        let rows = (0..count)
            .map(|i| Record::new(i as u64, format!("Task #{}", i + 1)))
            .collect();
        GridState::new(rows)
    }

    #[test]
    fn test_starts_unsorted_and_unselected() {
        let grid = grid(3);
        assert_eq!(grid.sort_selector(), ("id", Direction::None));
        assert!(grid.selection().is_empty());
        assert_eq!(grid.visible_rows(), grid.rows());
    }

    #[test]
    fn test_toggle_sort_cycles_on_same_column() {
        let mut grid = grid(3);
        grid.toggle_sort("title");
        assert_eq!(grid.sort_selector(), ("title", Direction::Asc));
        grid.toggle_sort("title");
        assert_eq!(grid.sort_selector(), ("title", Direction::Desc));
        grid.toggle_sort("title");
        assert_eq!(grid.sort_selector(), ("title", Direction::None));
    }

    #[test]
    fn test_toggle_sort_resets_on_new_column() {
        let mut grid = grid(3);
        grid.toggle_sort("title");
        grid.toggle_sort("title");
        grid.toggle_sort("client");
        assert_eq!(grid.sort_selector(), ("client", Direction::Asc));
    }

    #[test]
    fn test_edit_while_sorted_bakes_in_presented_order() {
        let mut grid = GridState::new(vec![
            Record::new(0, "banana"),
            Record::new(1, "apple"),
            Record::new(2, "cherry"),
        ]);
        grid.toggle_sort("title");

        // Row 0 of the presented (ascending) sequence is "apple".
        grid.apply_edit(0, 0, &RecordPatch::new().version("v2")).unwrap();

        let titles: Vec<_> = grid.rows().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "banana", "cherry"]);
        assert_eq!(grid.rows()[0].version, "v2");
    }

    #[test]
    fn test_rejected_edit_leaves_store_unchanged() {
        let mut grid = grid(3);
        let before = grid.rows().to_vec();
        let err = grid.apply_edit(1, 5, &RecordPatch::new().client("acme"));
        assert!(err.is_err());
        assert_eq!(grid.rows(), before.as_slice());
    }

    #[test]
    fn test_selection_pruned_on_row_replacement() {
        let mut grid = grid(4);
        grid.toggle_selected(1);
        grid.toggle_selected(3);
        assert_eq!(grid.selection().len(), 2);

        grid.replace_rows(vec![Record::new(1, "Task #2")]);
        assert!(grid.is_selected(1));
        assert!(!grid.is_selected(3));
    }

    #[test]
    fn test_selection_ignores_unknown_ids() {
        let mut grid = grid(2);
        grid.toggle_selected(99);
        assert!(grid.selection().is_empty());

        grid.set_selection(HashSet::from([0, 99]));
        assert_eq!(grid.selection(), &HashSet::from([0]));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut grid = grid(3);
        grid.select_all();
        assert_eq!(grid.selection().len(), 3);
        grid.clear_selection();
        assert!(grid.selection().is_empty());
    }
}
