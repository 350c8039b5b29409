use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::TransactionRecord;

/// Key used for records without a category
pub const UNCATEGORIZED: &str = "Без категории";

/// Accumulated absolute amounts per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&position) => self.entries[position].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index.get(category).map(|&position| self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Decimal)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        let mut totals = CategoryTotals::new();
        for (category, amount) in iter {
            totals.add(category.as_ref(), amount);
        }
        totals
    }
}

/// Maps a missing or blank category to [`UNCATEGORIZED`]
pub fn normalize_category(category: Option<&str>) -> &str {
    match category {
        Some(name) if !name.trim().is_empty() => name,
        _ => UNCATEGORIZED,
    }
}

/// Splits records into `(expenses, income)` totals keyed by category.
///
/// Negative amounts are expenses; zero and positive amounts are income.
/// Both sides accumulate absolute values.
pub fn aggregate<'a, I>(records: I) -> (CategoryTotals, CategoryTotals)
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut expenses = CategoryTotals::new();
    let mut income = CategoryTotals::new();

    for record in records {
        let category = normalize_category(record.category.as_deref());
        if record.amount < Decimal::ZERO {
            expenses.add(category, record.amount.abs());
        } else {
            income.add(category, record.amount.abs());
        }
    }

    debug!(
        expense_categories = expenses.len(),
        income_categories = income.len(),
        "aggregated records by category"
    );

    (expenses, income)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn record(amount: &str, category: Option<&str>) -> TransactionRecord {
        let mut record =
            TransactionRecord::new("01.01.2021 10:00:00", "OK", Decimal::from_str(amount).unwrap());
        record.category = category.map(str::to_string);
        record
    }

    #[test]
    fn test_aggregate_splits_by_sign() {
        let records = vec![
            record("-160.89", Some("Супермаркеты")),
            record("-64.00", Some("Супермаркеты")),
            record("-3000", Some("Наличные")),
            record("5000", Some("Зарплата")),
            record("-118.12", Some("Супермаркеты")),
        ];

        let (expenses, income) = aggregate(&records);

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses.get("Супермаркеты"), Some(Decimal::from_str("343.01").unwrap()));
        assert_eq!(expenses.get("Наличные"), Some(Decimal::from(3000)));
        assert_eq!(income.get("Зарплата"), Some(Decimal::from(5000)));

        let order: Vec<&str> = expenses.iter().map(|(category, _)| category).collect();
        assert_eq!(order, vec!["Супермаркеты", "Наличные"]);
    }

    #[rstest]
    #[case("0")]
    #[case("-0")]
    #[case("0.00")]
    fn test_zero_amount_counts_as_income(#[case] amount: &str) {
        let records = vec![record(amount, Some("Кэшбэк"))];
        let (expenses, income) = aggregate(&records);

        assert!(expenses.is_empty());
        assert_eq!(income.get("Кэшбэк"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_missing_category_uses_placeholder() {
        let records = vec![
            record("-10", None),
            record("-15", Some("")),
            record("-5", Some("  ")),
        ];
        let (expenses, _) = aggregate(&records);

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses.get(UNCATEGORIZED), Some(Decimal::from(30)));
    }

    #[test]
    fn test_single_income_record() {
        let records = vec![record("100", Some("Пополнение"))];
        let (expenses, income) = aggregate(&records);

        assert!(expenses.is_empty());
        assert_eq!(income.total(), Decimal::from(100));
    }

    #[test]
    fn test_category_totals_from_iter_merges_duplicates() {
        let totals: CategoryTotals = [
            ("Топливо", Decimal::from(100)),
            ("Фастфуд", Decimal::from(50)),
            ("Топливо", Decimal::from(25)),
        ]
        .into_iter()
        .collect();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Топливо"), Some(Decimal::from(125)));
        assert_eq!(totals.total(), Decimal::from(175));
    }
}
