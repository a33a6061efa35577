//! Error types

/// Error for range edits over the row collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The edit range does not address valid row positions.
    #[error("Invalid edit range {from}..={to} for {len} rows")]
    InvalidRange { from: usize, to: usize, len: usize },
}

impl EditError {
    /// Creates a new invalid range error.
    pub fn invalid_range(from: usize, to: usize, len: usize) -> Self {
        Self::InvalidRange { from, to, len }
    }
}

/// Error for parsing raw cell input into a patch value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchError {
    /// The column is identity or not a record field.
    #[error("Column '{column}' is not editable")]
    NotEditable { column: String },

    /// The input is not a number.
    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },

    /// The number is outside the 0 to 100 progress range.
    #[error("Progress must be between 0 and 100, got {value}")]
    OutOfRange { value: f64 },

    /// The input is not a boolean.
    #[error("'{input}' is not a boolean (expected true/false)")]
    InvalidBool { input: String },
}

impl PatchError {
    /// Creates a new not-editable error.
    pub fn not_editable(column: impl Into<String>) -> Self {
        Self::NotEditable {
            column: column.into(),
        }
    }

    /// Creates a new invalid number error.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Creates a new out-of-range error.
    pub fn out_of_range(value: f64) -> Self {
        Self::OutOfRange { value }
    }

    /// Creates a new invalid boolean error.
    pub fn invalid_bool(input: impl Into<String>) -> Self {
        Self::InvalidBool {
            input: input.into(),
        }
    }
}
