use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::aggregate::CategoryTotals;
use super::types::{CategoryEntry, ReportSection};

/// Expense categories reported apart from the main list
pub const TRANSFERS_AND_CASH: [&str; 2] = ["Переводы", "Наличные"];

/// Overflow bucket for expense categories beyond the top ones
pub const OTHER_CATEGORY: &str = "Остальное";

/// Named expense categories kept before folding the rest into [`OTHER_CATEGORY`]
pub const MAIN_CATEGORY_LIMIT: usize = 7;

/// Rounds to a whole number, ties to even
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

fn sort_descending(group: &mut [(&str, Decimal)]) {
    // stable: equal amounts keep first-seen order
    group.sort_by(|a, b| b.1.cmp(&a.1));
}

fn into_entries(group: Vec<(&str, Decimal)>) -> Vec<CategoryEntry> {
    group
        .into_iter()
        .map(|(category, amount)| CategoryEntry::rounded(category, amount))
        .collect()
}

/// Builds the expense section.
///
/// Transfers and cash go to `transfers_and_cash`; the rest is sorted by
/// amount and, past [`MAIN_CATEGORY_LIMIT`] entries, the smallest ones are
/// summed into a trailing [`OTHER_CATEGORY`] entry.
pub fn reduce_expenses(totals: &CategoryTotals) -> ReportSection {
    let mut total_amount = Decimal::ZERO;
    let mut main = Vec::new();
    let mut transfers_and_cash = Vec::new();

    for (category, amount) in totals.iter() {
        debug!(category, %amount, "expense category");
        total_amount += amount;

        if TRANSFERS_AND_CASH.contains(&category) {
            transfers_and_cash.push((category, amount));
        } else {
            main.push((category, amount));
        }
    }

    sort_descending(&mut main);
    sort_descending(&mut transfers_and_cash);

    let other = (main.len() > MAIN_CATEGORY_LIMIT).then(|| {
        main.drain(MAIN_CATEGORY_LIMIT..)
            .map(|(_, amount)| amount)
            .sum::<Decimal>()
    });

    let mut main = into_entries(main);
    if let Some(amount) = other {
        main.push(CategoryEntry::rounded(OTHER_CATEGORY, amount));
    }

    ReportSection {
        total_amount,
        main,
        transfers_and_cash: Some(into_entries(transfers_and_cash)),
    }
}

/// Builds the income section: every category, largest first, no cap.
pub fn reduce_income(totals: &CategoryTotals) -> ReportSection {
    let mut total_amount = Decimal::ZERO;
    let mut main = Vec::with_capacity(totals.len());

    for (category, amount) in totals.iter() {
        debug!(category, %amount, "income category");
        total_amount += amount;
        main.push((category, amount));
    }

    sort_descending(&mut main);

    ReportSection {
        total_amount,
        main: into_entries(main),
        transfers_and_cash: None,
    }
}
