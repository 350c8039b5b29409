use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use super::dto::CsvRecord;
use crate::adapters::traits::RecordSource;
use crate::errors::{ReportError, ReportResult};
use crate::types::TransactionRecord;

/// Reads bank exports saved as CSV
#[derive(Debug, Clone, Copy)]
pub struct CsvRecordSource {
    delimiter: u8,
}

impl Default for CsvRecordSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn parse(&self, content: &str) -> ReportResult<Vec<TransactionRecord>> {
        let content = content.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();

        for result in reader.deserialize::<CsvRecord>() {
            let raw = result.map_err(|e| ReportError::SourceFailed(format!("CSV deserialize error: {}", e)))?;
            records.push(raw.try_into()?);
        }

        Ok(records)
    }
}

impl RecordSource for CsvRecordSource {
    fn load(&self, path: &Path) -> ReportResult<Vec<TransactionRecord>> {
        let content = fs::read_to_string(path)?;
        let records = self.parse(&content)?;
        info!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}
