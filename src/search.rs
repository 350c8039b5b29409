//! Record lookups over a loaded export.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::TransactionRecord;

/// Category holding transfers between people
pub const TRANSFERS_CATEGORY: &str = "Переводы";

// A name followed by an initial, e.g. "Валерий А."
static PERSON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w* \w\.").expect("valid person pattern"));

/// Records whose category or description contains `query`, ignoring case
pub fn simple_search<'a>(records: &'a [TransactionRecord], query: &str) -> Vec<&'a TransactionRecord> {
    let query = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let category = record.category.as_deref().unwrap_or_default().to_lowercase();
            let description = record.description.as_deref().unwrap_or_default().to_lowercase();
            category.contains(&query) || description.contains(&query)
        })
        .collect()
}

/// Transfers addressed to private persons
pub fn search_by_persons(records: &[TransactionRecord]) -> Vec<&TransactionRecord> {
    records
        .iter()
        .filter(|record| record.category.as_deref() == Some(TRANSFERS_CATEGORY))
        .filter(|record| {
            record
                .description
                .as_deref()
                .is_some_and(|description| PERSON_PATTERN.is_match(description))
        })
        .collect()
}
