pub mod dto;
pub mod sink;
pub mod source;

pub mod prelude {
    pub use super::dto::CsvRecord;
    pub use super::sink::CsvReportSink;
    pub use super::source::CsvRecordSource;
}
