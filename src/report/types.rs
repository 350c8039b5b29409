use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reduce::round_amount;

/// One category line of a report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub amount: Decimal,
}

impl CategoryEntry {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Builds an entry with its amount rounded to a whole number
    pub fn rounded(category: impl Into<String>, amount: Decimal) -> Self {
        Self::new(category, round_amount(amount))
    }
}

/// Expense or income section of a report.
///
/// `total_amount` is the exact sum of every category that fed the section,
/// taken before entry amounts are rounded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub total_amount: Decimal,
    pub main: Vec<CategoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers_and_cash: Option<Vec<CategoryEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub currency: String,
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    pub stock: String,
    pub price: Decimal,
}

/// Currency and stock entries supplied by a reference data provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
}

/// Final report handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub expenses: ReportSection,
    pub income: ReportSection,
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
}
