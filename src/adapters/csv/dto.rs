use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;
use crate::types::TransactionRecord;

/// One row of a bank export, with the export's own column names.
///
/// Empty cells deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Дата операции")]
    pub operation_date: String,
    #[serde(rename = "Дата платежа")]
    pub payment_date: Option<String>,
    #[serde(rename = "Номер карты")]
    pub card_number: Option<String>,
    #[serde(rename = "Статус")]
    pub status: Option<String>,
    #[serde(rename = "Сумма платежа")]
    pub amount: String,
    #[serde(rename = "Валюта платежа")]
    pub currency: Option<String>,
    #[serde(rename = "Категория")]
    pub category: Option<String>,
    #[serde(rename = "MCC")]
    pub mcc: Option<String>,
    #[serde(rename = "Описание")]
    pub description: Option<String>,
}

/// Parses amounts such as `-160,89`, `1 000.50` or `-3000`
pub fn parse_amount(raw: &str) -> Result<Decimal, ReportError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&cleaned).map_err(|e| ReportError::InvalidAmount(format!("'{}': {}", raw, e)))
}

impl TryFrom<CsvRecord> for TransactionRecord {
    type Error = ReportError;

    fn try_from(raw: CsvRecord) -> Result<Self, Self::Error> {
        Ok(TransactionRecord {
            amount: parse_amount(&raw.amount)?,
            operation_date: raw.operation_date.into(),
            payment_date: raw.payment_date,
            card_number: raw.card_number,
            status: raw.status,
            currency: raw.currency,
            category: raw.category,
            mcc: raw.mcc,
            description: raw.description,
        })
    }
}

impl From<&TransactionRecord> for CsvRecord {
    fn from(record: &TransactionRecord) -> Self {
        CsvRecord {
            operation_date: record.operation_date.as_str().to_string(),
            payment_date: record.payment_date.clone(),
            card_number: record.card_number.clone(),
            status: record.status.clone(),
            amount: record.amount.to_string(),
            currency: record.currency.clone(),
            category: record.category.clone(),
            mcc: record.mcc.clone(),
            description: record.description.clone(),
        }
    }
}
