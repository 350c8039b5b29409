//! Build categorized expense and income reports from bank transaction exports.
//!
//! ```rust,ignore
//! use bank_report_rs::{CsvRecordSource, ReportBuilder, StubReferenceData};
//!
//! let source = CsvRecordSource::new();
//! let quotes = StubReferenceData::new("user_settings.json");
//!
//! let response = ReportBuilder::new()
//!     .reference_date("20.05.2020")
//!     .granularity("W")
//!     .source(&source, "operations.csv")
//!     .reference_data(&quotes)
//!     .build()?;
//! ```

mod builder;
mod types;

pub mod adapters;
pub mod errors;
pub mod report;
pub mod search;

pub use adapters::prelude::*;
pub use builder::ReportBuilder;
pub use errors::{ReportError, ReportResult};
pub use report::prelude::*;
pub use types::{OPERATION_DATE_FORMAT, OperationDateTime, TransactionRecord};
