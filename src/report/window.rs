use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ReportError, ReportResult};
use crate::types::TransactionRecord;

/// Format of the reference date passed to the report (`DD.MM.YYYY`)
pub const REFERENCE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Size of the reporting window ending at the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Granularity {
    #[default]
    #[serde(rename = "M")]
    Month,
    #[serde(rename = "W")]
    Week,
    #[serde(rename = "Y")]
    Year,
    #[serde(rename = "ALL")]
    All,
}

impl Granularity {
    /// Lenient parse: anything unrecognized falls back to [`Granularity::Month`]
    pub fn from_flag(flag: &str) -> Self {
        flag.parse().unwrap_or_default()
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            Granularity::Month => "M",
            Granularity::Week => "W",
            Granularity::Year => "Y",
            Granularity::All => "ALL",
        }
    }
}

impl FromStr for Granularity {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Granularity::Month),
            "W" => Ok(Granularity::Week),
            "Y" => Ok(Granularity::Year),
            "ALL" => Ok(Granularity::All),
            other => Err(ReportError::UnsupportedGranularity(other.to_string())),
        }
    }
}

pub fn parse_reference_date(date: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), REFERENCE_DATE_FORMAT)
        .map_err(|_| ReportError::InvalidDateFormat(date.to_string()))
}

/// Reporting window. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    /// Computes the window for `reference` at the given granularity.
    ///
    /// The end is midnight after the reference day, so the whole reference
    /// day is covered. For [`Granularity::Week`] the start is the Monday of
    /// the reference week, clamped to the first of the month when that
    /// Monday falls in the previous month.
    pub fn new(reference: NaiveDate, granularity: Granularity) -> ReportResult<Self> {
        let start = match granularity {
            Granularity::Month => reference.with_day(1),
            Granularity::Week => {
                let monday = reference.day() as i64
                    - reference.weekday().num_days_from_monday() as i64;
                reference.with_day(monday.max(1) as u32)
            }
            Granularity::Year => NaiveDate::from_ymd_opt(reference.year(), 1, 1),
            Granularity::All => NaiveDate::from_ymd_opt(1, 1, 1),
        };

        let end = reference.checked_add_days(Days::new(1));

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                start: start.and_time(NaiveTime::MIN),
                end: end.and_time(NaiveTime::MIN),
            }),
            _ => Err(ReportError::InvalidDateFormat(
                reference.format(REFERENCE_DATE_FORMAT).to_string(),
            )),
        }
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        self.start < moment && moment < self.end
    }
}

/// Selects settled records inside `window`, keeping input order.
///
/// Every record's operation date is parsed; one malformed date fails the call.
pub fn filter_by_window<'a>(
    records: &'a [TransactionRecord],
    window: &DateWindow,
) -> ReportResult<Vec<&'a TransactionRecord>> {
    let mut selected = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let moment = record.operation_date.parse(row)?;
        if record.is_settled() && window.contains(moment) {
            selected.push(record);
        }
    }

    debug!(
        total = records.len(),
        selected = selected.len(),
        start = %window.start,
        end = %window.end,
        "filtered records by date window"
    );

    Ok(selected)
}

pub fn filter_by_date_range<'a>(
    records: &'a [TransactionRecord],
    reference_date: &str,
    granularity: Granularity,
) -> ReportResult<Vec<&'a TransactionRecord>> {
    let reference = parse_reference_date(reference_date)?;
    let window = DateWindow::new(reference, granularity)?;
    filter_by_window(records, &window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%d.%m.%Y %H:%M:%S").unwrap()
    }

    fn record(date: &str, status: &str) -> TransactionRecord {
        TransactionRecord::new(date, status, Decimal::from(-100))
    }

    #[rstest]
    #[case("M", Granularity::Month)]
    #[case("W", Granularity::Week)]
    #[case("Y", Granularity::Year)]
    #[case("ALL", Granularity::All)]
    #[case("D", Granularity::Month)]
    #[case("all", Granularity::Month)]
    #[case("", Granularity::Month)]
    fn test_granularity_from_flag(#[case] flag: &str, #[case] expected: Granularity) {
        assert_eq!(Granularity::from_flag(flag), expected);
    }

    #[test]
    fn test_granularity_strict_parse() {
        assert!(matches!(
            "Q".parse::<Granularity>(),
            Err(ReportError::UnsupportedGranularity(flag)) if flag == "Q"
        ));
        assert_eq!("W".parse::<Granularity>().unwrap().as_flag(), "W");
    }

    #[rstest]
    #[case("20.05.2020")]
    #[case(" 01.01.2021 ")]
    fn test_parse_reference_date_valid(#[case] input: &str) {
        assert!(parse_reference_date(input).is_ok());
    }

    #[rstest]
    #[case("2020-05-20")]
    #[case("20.05.2020 10:00:00")]
    #[case("31.02.2020")]
    #[case("")]
    fn test_parse_reference_date_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_reference_date(input),
            Err(ReportError::InvalidDateFormat(_))
        ));
    }

    #[rstest]
    // Wednesday 20.05.2020
    #[case(Granularity::Month, "01.05.2020 00:00:00")]
    #[case(Granularity::Week, "18.05.2020 00:00:00")]
    #[case(Granularity::Year, "01.01.2020 00:00:00")]
    #[case(Granularity::All, "01.01.0001 00:00:00")]
    fn test_window_start(#[case] granularity: Granularity, #[case] expected: &str) {
        let reference = NaiveDate::from_ymd_opt(2020, 5, 20).unwrap();
        let window = DateWindow::new(reference, granularity).unwrap();
        assert_eq!(window.start, at(expected));
        assert_eq!(window.end, at("21.05.2020 00:00:00"));
    }

    #[test]
    fn test_week_window_clamps_to_first_of_month() {
        // Sunday 03.05.2020, its Monday is in April
        let reference = NaiveDate::from_ymd_opt(2020, 5, 3).unwrap();
        let window = DateWindow::new(reference, Granularity::Week).unwrap();
        assert_eq!(window.start, at("01.05.2020 00:00:00"));
    }

    #[test]
    fn test_window_end_rolls_over_year() {
        let reference = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
        let window = DateWindow::new(reference, Granularity::Month).unwrap();
        assert_eq!(window.end, at("01.01.2022 00:00:00"));
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let reference = NaiveDate::from_ymd_opt(2020, 5, 20).unwrap();
        let window = DateWindow::new(reference, Granularity::Month).unwrap();

        assert!(!window.contains(at("01.05.2020 00:00:00")));
        assert!(window.contains(at("01.05.2020 00:00:01")));
        assert!(window.contains(at("20.05.2020 23:59:59")));
        assert!(!window.contains(at("21.05.2020 00:00:00")));
    }

    #[test]
    fn test_filter_keeps_settled_records_in_order() {
        let records = vec![
            record("19.05.2020 12:00:00", "OK"),
            record("10.05.2020 12:00:00", "FAILED"),
            record("30.04.2020 12:00:00", "OK"),
            record("02.05.2020 08:15:00", "OK"),
            record("21.05.2020 00:00:01", "OK"),
        ];

        let selected = filter_by_date_range(&records, "20.05.2020", Granularity::Month).unwrap();

        let dates: Vec<&str> = selected.iter().map(|r| r.operation_date.as_str()).collect();
        assert_eq!(dates, vec!["19.05.2020 12:00:00", "02.05.2020 08:15:00"]);
    }

    #[test]
    fn test_filter_all_returns_every_settled_record_up_to_reference_day() {
        let records = vec![
            record("01.01.2015 09:00:00", "OK").with_category("Переводы"),
            record("20.05.2020 23:00:00", "OK"),
            record("20.05.2020 23:00:00", "FAILED"),
            record("21.05.2020 09:00:00", "OK"),
        ];

        let selected = filter_by_date_range(&records, "20.05.2020", Granularity::All).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_filter_fails_on_malformed_record() {
        let records = vec![
            record("19.05.2020 12:00:00", "OK"),
            record("2020-05-19", "FAILED"),
        ];

        let result = filter_by_date_range(&records, "20.05.2020", Granularity::Month);
        assert!(matches!(
            result,
            Err(ReportError::MalformedRecord { row: 1, .. })
        ));
    }

    #[test]
    fn test_filter_rejects_bad_reference_date() {
        let records = vec![record("19.05.2020 12:00:00", "OK")];
        let result = filter_by_date_range(&records, "2020.05.20", Granularity::Month);
        assert!(matches!(result, Err(ReportError::InvalidDateFormat(_))));
    }
}
