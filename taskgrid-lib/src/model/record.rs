//! The task record

use serde::Deserialize;
use serde::Serialize;

/// One task row in the grid.
///
/// Identity is the numeric `id`, assigned by the data source and never
/// changed afterwards. Every other field can be rewritten through a
/// [`RecordPatch`](super::RecordPatch).
///
/// # Example
///
/// ```
/// use taskgrid_lib::model::Record;
///
/// let record = Record::new(7, "Task #8");
/// assert_eq!(record.id, 7);
/// assert_eq!(record.title, "Task #8");
/// assert!(!record.available);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier within the row collection.
    pub id: u64,
    pub title: String,
    pub client: String,
    pub area: String,
    pub country: String,
    pub contact: String,
    pub assignee: String,
    /// Completion percentage, 0 to 100.
    pub progress: f64,
    pub transaction: String,
    pub account: String,
    pub version: String,
    pub available: bool,
}

impl Record {
    /// Creates a record with the given identity and title; all other
    /// fields start empty.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns a field's raw value as text, keyed by column id.
    ///
    /// This is the unformatted value an edit UI starts from; display
    /// formatting (bars, glyphs) is the renderer's concern. Returns
    /// `None` for column ids that are not record fields.
    pub fn field_text(&self, column_id: &str) -> Option<String> {
        let text = match column_id {
            "id" => self.id.to_string(),
            "title" => self.title.clone(),
            "client" => self.client.clone(),
            "area" => self.area.clone(),
            "country" => self.country.clone(),
            "contact" => self.contact.clone(),
            "assignee" => self.assignee.clone(),
            "progress" => format_progress(self.progress),
            "transaction" => self.transaction.clone(),
            "account" => self.account.clone(),
            "version" => self.version.clone(),
            "available" => self.available.to_string(),
            _ => return None,
        };
        Some(text)
    }
}

/// Formats a progress value without a trailing `.0` for whole numbers.
fn format_progress(value: f64) -> String {
    if value.fract() == 0.0 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text_known_columns() {
        let record = Record {
            id: 3,
            title: "Task #4".into(),
            progress: 62.5,
            available: true,
            ..Record::default()
        };
        assert_eq!(record.field_text("id").as_deref(), Some("3"));
        assert_eq!(record.field_text("title").as_deref(), Some("Task #4"));
        assert_eq!(record.field_text("progress").as_deref(), Some("62.5"));
        assert_eq!(record.field_text("available").as_deref(), Some("true"));
    }

    #[test]
    fn test_field_text_whole_progress() {
        let record = Record {
            progress: 40.0,
            ..Record::default()
        };
        assert_eq!(record.field_text("progress").as_deref(), Some("40"));
    }

    #[test]
    fn test_field_text_unknown_column() {
        let record = Record::new(1, "Task #2");
        assert_eq!(record.field_text("budget"), None);
    }
}
