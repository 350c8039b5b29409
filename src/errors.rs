use thiserror::Error;

/// Errors raised while building a transaction report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Reference date does not match `DD.MM.YYYY`
    #[error("Invalid reference date format: {0}")]
    InvalidDateFormat(String),

    /// A record's operation date does not match `DD.MM.YYYY HH:MM:SS`
    #[error("Malformed record at row {row}: invalid operation date '{value}'")]
    MalformedRecord { row: usize, value: String },

    /// User settings file is missing or malformed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Granularity flag outside of M/W/Y/ALL (strict mode only)
    #[error("Unsupported granularity: {0}")]
    UnsupportedGranularity(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The record source could not produce records (detail in the message)
    #[error("Failed to load records: {0}")]
    SourceFailed(String),

    /// The report sink could not persist the result
    #[error("Failed to save report: {0}")]
    SinkFailed(String),

    /// The builder was called without records or a record source
    #[error("Records or a record source are required")]
    MissingRecords,

    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),
}

/// Convenience alias for results carrying [`ReportError`]
pub type ReportResult<T> = Result<T, ReportError>;
