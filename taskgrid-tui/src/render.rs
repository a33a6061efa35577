//! Per-column cell rendering.
//!
//! One renderer per column kind, with a method per render site: data
//! cells and the summary cell under the same column.

use taskgrid_lib::SummaryRow;
use taskgrid_lib::columns::ColumnKind;
use taskgrid_lib::model::Record;

/// Width of the progress bar in characters.
const BAR_WIDTH: usize = 5;

/// Renders one column kind's cells.
pub trait CellRenderer {
    /// The data cell for `column_id` of a record.
    fn cell(&self, record: &Record, column_id: &str) -> String;

    /// The summary (footer) cell for `column_id`.
    fn summary_cell(&self, summary: &SummaryRow, column_id: &str) -> String;
}

/// Plain text cells; carries the Total / record-count summary cells.
pub struct TextRenderer;

/// Progress bar with a rounded percentage.
pub struct ProgressRenderer;

/// Boolean glyph cells with the availability-share summary cell.
pub struct BooleanRenderer;

impl CellRenderer for TextRenderer {
    fn cell(&self, record: &Record, column_id: &str) -> String {
        record.field_text(column_id).unwrap_or_default()
    }

    fn summary_cell(&self, summary: &SummaryRow, column_id: &str) -> String {
        match column_id {
            "id" => "Total".into(),
            "title" => format!("{} records", summary.total_count),
            _ => String::new(),
        }
    }
}

impl CellRenderer for ProgressRenderer {
    fn cell(&self, record: &Record, _column_id: &str) -> String {
        progress_bar(record.progress)
    }

    fn summary_cell(&self, _summary: &SummaryRow, _column_id: &str) -> String {
        String::new()
    }
}

impl CellRenderer for BooleanRenderer {
    fn cell(&self, record: &Record, _column_id: &str) -> String {
        if record.available { "✔" } else { "✘" }.into()
    }

    fn summary_cell(&self, summary: &SummaryRow, _column_id: &str) -> String {
        format!("{}% ✔", summary.percent_available())
    }
}

/// The renderer for a column kind.
pub fn renderer_for(kind: ColumnKind) -> &'static dyn CellRenderer {
    match kind {
        ColumnKind::Text => &TextRenderer,
        ColumnKind::Progress => &ProgressRenderer,
        ColumnKind::Boolean => &BooleanRenderer,
    }
}

/// Formats a 0-100 value as a bar plus rounded percentage.
fn progress_bar(value: f64) -> String {
    let clamped = value.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        clamped.round() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "░░░░░   0%");
        assert_eq!(progress_bar(100.0), "█████ 100%");
        assert_eq!(progress_bar(62.0), "███░░  62%");
        // Out-of-range values clamp instead of overflowing the bar.
        assert_eq!(progress_bar(250.0), "█████ 100%");
    }

    #[test]
    fn test_boolean_glyphs() {
        let mut record = Record::new(0, "Task #1");
        record.available = true;
        assert_eq!(BooleanRenderer.cell(&record, "available"), "✔");
        record.available = false;
        assert_eq!(BooleanRenderer.cell(&record, "available"), "✘");
    }

    #[test]
    fn test_summary_cells() {
        let summary = SummaryRow {
            total_count: 1000,
            yes_count: 400,
        };
        assert_eq!(TextRenderer.summary_cell(&summary, "id"), "Total");
        assert_eq!(
            TextRenderer.summary_cell(&summary, "title"),
            "1000 records"
        );
        assert_eq!(TextRenderer.summary_cell(&summary, "client"), "");
        assert_eq!(BooleanRenderer.summary_cell(&summary, "available"), "40% ✔");
    }

    #[test]
    fn test_empty_summary_percentage() {
        let summary = SummaryRow::default();
        assert_eq!(BooleanRenderer.summary_cell(&summary, "available"), "0% ✔");
    }
}
