use std::path::Path;

use crate::errors::ReportResult;
use crate::report::types::{ReferenceData, Response};
use crate::types::TransactionRecord;

/// Supplies the full set of transaction records from a tabular export
pub trait RecordSource {
    fn load(&self, path: &Path) -> ReportResult<Vec<TransactionRecord>>;
}

/// Supplies currency rates and stock prices for the configured symbols
pub trait ReferenceDataProvider {
    fn get_rates(&self) -> ReportResult<ReferenceData>;
}

/// Persists a finished report
pub trait ReportSink {
    fn save(&self, response: &Response) -> ReportResult<()>;
}
