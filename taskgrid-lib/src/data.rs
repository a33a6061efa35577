//! Sample row generation.
//!
//! Stands in for a real data source; any loader that produces `Record`s
//! can replace it.

use rand::Rng;

use crate::model::Record;

const CLIENTS: &[&str] = &[
    "Contoso",
    "Fabrikam",
    "Northwind Traders",
    "Adventure Works",
    "Wide World Importers",
    "Tailspin Toys",
];

const AREAS: &[&str] = &["Sales", "Support", "Logistics", "Finance", "Research"];

const COUNTRIES: &[&str] = &[
    "Belgium",
    "Germany",
    "France",
    "Japan",
    "Canada",
    "Australia",
];

const CONTACTS: &[&str] = &[
    "alice@example.com",
    "bob@example.com",
    "carol@example.com",
    "dave@example.com",
];

const ASSIGNEES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"];

const TRANSACTIONS: &[&str] = &["Invoice", "Refund", "Deposit", "Withdrawal"];

const ACCOUNTS: &[&str] = &["acc-operations", "acc-payroll", "acc-capital"];

const VERSIONS: &[&str] = &["v1", "v1.1", "v2", "v3-beta"];

/// Generates `count` sample task rows.
///
/// Text fields cycle through fixed pools so sorting has ties to exercise;
/// progress and availability are randomized.
pub fn sample_rows(count: usize) -> Vec<Record> {
    let mut rng = rand::rng();

    (0..count)
        .map(|i| Record {
            id: i as u64,
            title: format!("Task #{}", i + 1),
            client: CLIENTS[i % CLIENTS.len()].to_string(),
            area: AREAS[i % AREAS.len()].to_string(),
            country: COUNTRIES[i % COUNTRIES.len()].to_string(),
            contact: CONTACTS[i % CONTACTS.len()].to_string(),
            assignee: ASSIGNEES[i % ASSIGNEES.len()].to_string(),
            progress: rng.random_range(0.0..=100.0_f64).round(),
            transaction: TRANSACTIONS[i % TRANSACTIONS.len()].to_string(),
            account: ACCOUNTS[i % ACCOUNTS.len()].to_string(),
            version: VERSIONS[i % VERSIONS.len()].to_string(),
            available: rng.random_bool(0.5),
        })
        .collect()
}
