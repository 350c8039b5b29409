use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::traits::ReferenceDataProvider;
use crate::errors::{ReportError, ReportResult};
use crate::report::types::{CurrencyRate, ReferenceData, StockPrice};

/// User preferences listing the currencies and stocks to show in a report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_currencies: Vec<String>,
    pub user_stocks: Vec<String>,
}

impl UserSettings {
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::ConfigurationError(format!("cannot read {}: {}", path.display(), e))
        })?;
        content.parse()
    }
}

impl FromStr for UserSettings {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| ReportError::ConfigurationError(e.to_string()))
    }
}

/// Quote returned for every symbol until a live pricing source is wired in
fn stub_quote() -> Decimal {
    Decimal::new(9942, 2)
}

/// Reference data provider answering every configured symbol with a fixed quote.
///
/// The settings file is read on each call, so a missing or broken file
/// surfaces as [`ReportError::ConfigurationError`] from the report build.
#[derive(Debug, Clone)]
pub struct StubReferenceData {
    settings_path: PathBuf,
}

impl StubReferenceData {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn quotes(settings: &UserSettings) -> ReferenceData {
        let quote = stub_quote();
        ReferenceData {
            currency_rates: settings
                .user_currencies
                .iter()
                .map(|currency| CurrencyRate {
                    currency: currency.clone(),
                    rate: quote,
                })
                .collect(),
            stock_prices: settings
                .user_stocks
                .iter()
                .map(|stock| StockPrice {
                    stock: stock.clone(),
                    price: quote,
                })
                .collect(),
        }
    }
}

impl ReferenceDataProvider for StubReferenceData {
    fn get_rates(&self) -> ReportResult<ReferenceData> {
        let settings = UserSettings::from_path(&self.settings_path)
            .inspect_err(|e| warn!(error = %e, "failed to load user settings"))?;
        debug!(
            currencies = settings.user_currencies.len(),
            stocks = settings.user_stocks.len(),
            "resolved stub quotes"
        );
        Ok(Self::quotes(&settings))
    }
}

impl ReferenceDataProvider for UserSettings {
    fn get_rates(&self) -> ReportResult<ReferenceData> {
        Ok(StubReferenceData::quotes(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const SETTINGS: &str = r#"{
        "user_currencies": ["USD", "EUR"],
        "user_stocks": ["AAPL", "AMZN", "GOOGL", "MSFT", "TSLA"]
    }"#;

    #[test]
    fn test_get_rates_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SETTINGS.as_bytes()).unwrap();

        let data = StubReferenceData::new(file.path()).get_rates().unwrap();

        assert_eq!(data.currency_rates.len(), 2);
        assert_eq!(data.currency_rates[0].currency, "USD");
        assert_eq!(data.currency_rates[1].currency, "EUR");
        assert_eq!(data.stock_prices.len(), 5);
        assert_eq!(data.stock_prices[4].stock, "TSLA");
        assert!(data.stock_prices.iter().all(|s| s.price.to_string() == "99.42"));
        assert!(data.currency_rates.iter().all(|c| c.rate.to_string() == "99.42"));
    }

    #[test]
    fn test_missing_settings_file() {
        let provider = StubReferenceData::new("/nonexistent/user_settings.json");
        assert!(matches!(
            provider.get_rates(),
            Err(ReportError::ConfigurationError(_))
        ));
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"user_currencies": ["USD"]}"#)]
    #[case(r#"{"user_currencies": "USD", "user_stocks": []}"#)]
    fn test_malformed_settings(#[case] content: &str) {
        assert!(matches!(
            content.parse::<UserSettings>(),
            Err(ReportError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_empty_settings_give_empty_lists() {
        let data = UserSettings::default().get_rates().unwrap();
        assert_eq!(data, ReferenceData::default());
    }
}
