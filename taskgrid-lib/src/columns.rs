//! Column descriptors for the grid.

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Plain text cells.
    #[default]
    Text,
    /// Numeric percentage rendered as a progress bar.
    Progress,
    /// Boolean rendered as a glyph.
    Boolean,
}

/// Column configuration consumed by the grid widget.
///
/// # Examples
///
/// ```
/// use taskgrid_lib::columns::Column;
///
/// let column = Column::new("title", "Task").width(12).frozen().editable().sortable();
/// assert!(column.sortable);
/// assert!(!column.resizable);
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Column identifier, matching a record field.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Width in terminal columns.
    pub width: u16,
    /// Frozen columns stay leftmost when the rest scroll.
    pub frozen: bool,
    /// Whether cells in this column accept edits.
    pub editable: bool,
    /// Whether the column can be resized.
    pub resizable: bool,
    /// Whether the header toggles sorting.
    pub sortable: bool,
    /// Cell renderer selection.
    pub kind: ColumnKind,
}

impl Column {
    /// Default width for columns that do not set one.
    pub const DEFAULT_WIDTH: u16 = 16;

    /// Creates a text column with the default width and no flags set.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: Self::DEFAULT_WIDTH,
            frozen: false,
            editable: false,
            resizable: false,
            sortable: false,
            kind: ColumnKind::Text,
        }
    }

    /// Sets the width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Keeps the column leftmost when the rest scroll.
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Allows cell edits in this column.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Allows resizing this column.
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Makes the header toggle sorting.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the cell renderer kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }
}

/// The task grid's column layout.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(6).frozen().sortable(),
        Column::new("title", "Task")
            .width(12)
            .frozen()
            .editable()
            .resizable()
            .sortable(),
        Column::new("client", "Client")
            .width(22)
            .editable()
            .resizable()
            .sortable(),
        Column::new("area", "Area")
            .width(12)
            .editable()
            .resizable()
            .sortable(),
        Column::new("country", "Country")
            .width(12)
            .editable()
            .resizable()
            .sortable(),
        Column::new("contact", "Contact")
            .width(16)
            .editable()
            .resizable()
            .sortable(),
        Column::new("assignee", "Assignee")
            .width(15)
            .editable()
            .resizable()
            .sortable(),
        Column::new("progress", "Completion")
            .width(11)
            .resizable()
            .sortable()
            .kind(ColumnKind::Progress),
        Column::new("transaction", "Transaction type")
            .resizable()
            .sortable(),
        Column::new("account", "Account").width(15).resizable().sortable(),
        Column::new("version", "Version").editable().resizable().sortable(),
        Column::new("available", "Available")
            .width(9)
            .resizable()
            .sortable()
            .kind(ColumnKind::Boolean),
    ]
}
