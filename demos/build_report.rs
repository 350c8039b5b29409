use bank_report_rs::{CsvRecordSource, CsvReportSink, ReportBuilder, StubReferenceData};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let date = args.get(1).map(String::as_str).unwrap_or("20.05.2020");
    let granularity = args.get(2).map(String::as_str).unwrap_or("M");
    let file_path = args.get(3).map(String::as_str).unwrap_or("demos/operations.csv");

    let source = CsvRecordSource::new();
    let quotes = StubReferenceData::new("demos/user_settings.json");
    let sink = CsvReportSink::new(env::temp_dir().join("report.csv"));

    let response = ReportBuilder::new()
        .reference_date(date)
        .granularity(granularity)
        .source(&source, file_path)
        .reference_data(&quotes)
        .sink(&sink)
        .build()?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    println!("\nSaved to {}", sink.path().display());

    Ok(())
}
