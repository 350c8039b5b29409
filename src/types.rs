use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// Format of the operation date column in bank exports
pub const OPERATION_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Raw operation date-time as it appears in the export (`DD.MM.YYYY HH:MM:SS`).
///
/// Parsing is deferred until the record is filtered, so a record source
/// never rejects rows on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationDateTime(String);

impl OperationDateTime {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the value, reporting `row` on failure
    pub fn parse(&self, row: usize) -> Result<NaiveDateTime, ReportError> {
        NaiveDateTime::parse_from_str(self.0.trim(), OPERATION_DATE_FORMAT).map_err(|_| {
            ReportError::MalformedRecord {
                row,
                value: self.0.clone(),
            }
        })
    }
}

impl From<String> for OperationDateTime {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OperationDateTime {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single bank operation, read-only once produced by a record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub operation_date: OperationDateTime,
    pub payment_date: Option<String>,
    pub card_number: Option<String>,
    pub status: Option<String>,
    /// Signed payment amount, negative for outflows
    pub amount: Decimal,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub mcc: Option<String>,
    pub description: Option<String>,
}

impl TransactionRecord {
    /// Minimal record with the fields the report pipeline reads
    pub fn new(operation_date: &str, status: &str, amount: Decimal) -> Self {
        Self {
            operation_date: operation_date.into(),
            payment_date: None,
            card_number: None,
            status: Some(status.to_string()),
            amount,
            currency: None,
            category: None,
            mcc: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// True when the operation settled successfully (exact `"OK"` status)
    pub fn is_settled(&self) -> bool {
        self.status.as_deref() == Some("OK")
    }
}
