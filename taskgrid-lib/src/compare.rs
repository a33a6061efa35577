//! Column comparison rules.

use std::cmp::Ordering;

use crate::model::Record;

/// Looks up the comparison rule for a column id.
///
/// Text columns compare lexicographically, `id` and `progress`
/// numerically, and `available` with `false` before `true`. Returns
/// `None` for columns without a defined ordering; callers treat those
/// as already ordered rather than failing.
pub fn comparator(column_id: &str) -> Option<fn(&Record, &Record) -> Ordering> {
    let cmp: fn(&Record, &Record) -> Ordering = match column_id {
        "id" => |a, b| a.id.cmp(&b.id),
        "title" => |a, b| a.title.cmp(&b.title),
        "client" => |a, b| a.client.cmp(&b.client),
        "area" => |a, b| a.area.cmp(&b.area),
        "country" => |a, b| a.country.cmp(&b.country),
        "contact" => |a, b| a.contact.cmp(&b.contact),
        "assignee" => |a, b| a.assignee.cmp(&b.assignee),
        "transaction" => |a, b| a.transaction.cmp(&b.transaction),
        "account" => |a, b| a.account.cmp(&b.account),
        "version" => |a, b| a.version.cmp(&b.version),
        // NaN never occurs in well-formed data; treat it as equal
        // instead of panicking.
        "progress" => |a, b| a.progress.partial_cmp(&b.progress).unwrap_or(Ordering::Equal),
        "available" => |a, b| a.available.cmp(&b.available),
        _ => return None,
    };
    Some(cmp)
}
