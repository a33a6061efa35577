//! Partial record updates

use serde::Deserialize;
use serde::Serialize;

use super::Record;
use crate::error::PatchError;

/// A partial update merged into every record of an edit range.
///
/// Fields left as `None` are untouched when the patch is applied; `id`
/// is identity and cannot be patched at all.
///
/// # Example
///
/// ```
/// use taskgrid_lib::model::{Record, RecordPatch};
///
/// let mut record = Record::new(1, "Task #2");
/// record.client = "Contoso".into();
///
/// RecordPatch::new().title("Renamed").apply(&mut record);
/// assert_eq!(record.title, "Renamed");
/// assert_eq!(record.client, "Contoso");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub client: Option<String>,
    pub area: Option<String>,
    pub country: Option<String>,
    pub contact: Option<String>,
    pub assignee: Option<String>,
    pub progress: Option<f64>,
    pub transaction: Option<String>,
    pub account: Option<String>,
    pub version: Option<String>,
    pub available: Option<bool>,
}

impl RecordPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title field (builder pattern).
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets the client field (builder pattern).
    pub fn client(mut self, value: impl Into<String>) -> Self {
        self.client = Some(value.into());
        self
    }

    /// Sets the area field (builder pattern).
    pub fn area(mut self, value: impl Into<String>) -> Self {
        self.area = Some(value.into());
        self
    }

    /// Sets the country field (builder pattern).
    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    /// Sets the contact field (builder pattern).
    pub fn contact(mut self, value: impl Into<String>) -> Self {
        self.contact = Some(value.into());
        self
    }

    /// Sets the assignee field (builder pattern).
    pub fn assignee(mut self, value: impl Into<String>) -> Self {
        self.assignee = Some(value.into());
        self
    }

    /// Sets the progress field (builder pattern).
    pub fn progress(mut self, value: f64) -> Self {
        self.progress = Some(value);
        self
    }

    /// Sets the transaction field (builder pattern).
    pub fn transaction(mut self, value: impl Into<String>) -> Self {
        self.transaction = Some(value.into());
        self
    }

    /// Sets the account field (builder pattern).
    pub fn account(mut self, value: impl Into<String>) -> Self {
        self.account = Some(value.into());
        self
    }

    /// Sets the version field (builder pattern).
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// Sets the available field (builder pattern).
    pub fn available(mut self, value: bool) -> Self {
        self.available = Some(value);
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this patch into `record`. Unset fields are untouched.
    pub fn apply(&self, record: &mut Record) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(client) = &self.client {
            record.client = client.clone();
        }
        if let Some(area) = &self.area {
            record.area = area.clone();
        }
        if let Some(country) = &self.country {
            record.country = country.clone();
        }
        if let Some(contact) = &self.contact {
            record.contact = contact.clone();
        }
        if let Some(assignee) = &self.assignee {
            record.assignee = assignee.clone();
        }
        if let Some(progress) = self.progress {
            record.progress = progress;
        }
        if let Some(transaction) = &self.transaction {
            record.transaction = transaction.clone();
        }
        if let Some(account) = &self.account {
            record.account = account.clone();
        }
        if let Some(version) = &self.version {
            record.version = version.clone();
        }
        if let Some(available) = self.available {
            record.available = available;
        }
    }

    /// Parses raw cell input into a single-field patch for a column.
    ///
    /// Text columns take the input as-is. `progress` must parse as a
    /// number in 0 to 100, `available` as `true`/`false` (or `yes`/`no`).
    /// `id` and unknown columns are not editable.
    pub fn parse(column_id: &str, input: &str) -> Result<Self, PatchError> {
        let patch = match column_id {
            "title" => Self::new().title(input),
            "client" => Self::new().client(input),
            "area" => Self::new().area(input),
            "country" => Self::new().country(input),
            "contact" => Self::new().contact(input),
            "assignee" => Self::new().assignee(input),
            "transaction" => Self::new().transaction(input),
            "account" => Self::new().account(input),
            "version" => Self::new().version(input),
            "progress" => {
                let value: f64 = input
                    .trim()
                    .parse()
                    .map_err(|_| PatchError::invalid_number(input))?;
                if !(0.0..=100.0).contains(&value) {
                    return Err(PatchError::out_of_range(value));
                }
                Self::new().progress(value)
            }
            "available" => match input.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Self::new().available(true),
                "false" | "no" => Self::new().available(false),
                _ => return Err(PatchError::invalid_bool(input)),
            },
            other => return Err(PatchError::not_editable(other)),
        };
        Ok(patch)
    }
}
