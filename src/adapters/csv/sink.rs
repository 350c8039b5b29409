use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use serde::Serialize;
use tracing::info;

use super::dto::CsvRecord;
use crate::adapters::traits::ReportSink;
use crate::errors::{ReportError, ReportResult};
use crate::report::types::{CategoryEntry, ReportSection, Response};
use crate::types::TransactionRecord;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    section: &'a str,
    group: &'a str,
    category: &'a str,
    amount: String,
}

/// Writes reports and record lists to a CSV file
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&self) -> ReportResult<Writer<std::fs::File>> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(sink_error)
    }

    /// Saves records (e.g. search results) with the export's column headers
    pub fn save_records<'a, I>(&self, records: I) -> ReportResult<()>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut writer = self.writer()?;
        let mut count = 0usize;
        for record in records {
            writer.serialize(CsvRecord::from(record)).map_err(sink_error)?;
            count += 1;
        }
        writer.flush()?;
        info!(path = %self.path.display(), count, "saved records");
        Ok(())
    }
}

fn sink_error(e: csv::Error) -> ReportError {
    ReportError::SinkFailed(e.to_string())
}

fn write_entries(
    writer: &mut Writer<std::fs::File>,
    section: &str,
    group: &str,
    entries: &[CategoryEntry],
) -> ReportResult<()> {
    for entry in entries {
        writer
            .serialize(ReportRow {
                section,
                group,
                category: &entry.category,
                amount: entry.amount.to_string(),
            })
            .map_err(sink_error)?;
    }
    Ok(())
}

fn write_section(
    writer: &mut Writer<std::fs::File>,
    name: &str,
    section: &ReportSection,
) -> ReportResult<()> {
    write_entries(writer, name, "main", &section.main)?;
    if let Some(entries) = &section.transfers_and_cash {
        write_entries(writer, name, "transfers_and_cash", entries)?;
    }
    writer
        .serialize(ReportRow {
            section: name,
            group: "total",
            category: "",
            amount: section.total_amount.to_string(),
        })
        .map_err(sink_error)
}

impl ReportSink for CsvReportSink {
    fn save(&self, response: &Response) -> ReportResult<()> {
        let mut writer = self.writer()?;
        write_section(&mut writer, "expenses", &response.expenses)?;
        write_section(&mut writer, "income", &response.income)?;
        writer.flush()?;
        info!(path = %self.path.display(), "saved report");
        Ok(())
    }
}
