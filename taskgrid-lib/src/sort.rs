//! Sort stage: derives an ordered view of the row collection.

use crate::compare::comparator;
use crate::model::Record;

/// Sort direction for a column.
///
/// `None` means the rows are presented in stored order. Repeated
/// activation of the same column header cycles
/// ascending, descending, unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, false before true).
    Asc,
    /// Descending order (Z-A, 9-0, true before false).
    Desc,
    /// No sort; stored order.
    #[default]
    None,
}

impl Direction {
    /// The next direction in the header-toggle cycle.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::None,
            Direction::None => Direction::Asc,
        }
    }

    /// Returns `true` for the unsorted direction.
    pub fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Asc => "ascending",
            Direction::Desc => "descending",
            Direction::None => "unsorted",
        };
        write!(f, "{name}")
    }
}

/// Produces the presented ordering of `rows` for a column and direction.
///
/// Pure: the input is never mutated and the result is a new collection.
/// `Direction::None` and columns without a comparison rule yield the
/// stored order. Descending is the ascending pass reversed, not a
/// re-sort with an inverted comparator: equal elements keep the relative
/// order the stable ascending pass gave them, and the whole sequence is
/// then inverted.
pub fn sort_rows(rows: &[Record], column_id: &str, direction: Direction) -> Vec<Record> {
    let mut sorted = rows.to_vec();
    if direction.is_none() {
        return sorted;
    }
    let Some(cmp) = comparator(column_id) else {
        return sorted;
    };
    sorted.sort_by(cmp);
    if direction == Direction::Desc {
        sorted.reverse();
    }
    sorted
}
