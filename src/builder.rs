use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use crate::{adapters::prelude::*, errors::ReportError, report::prelude::*, types::TransactionRecord};

/// Assembles a [`Response`] from records, a reference date and a granularity flag.
///
/// Records come either directly via [`ReportBuilder::records`] or from a
/// [`RecordSource`]; direct records win when both are set.
#[derive(Default)]
pub struct ReportBuilder<'a> {
    reference_date: Option<String>,
    granularity: Option<String>,
    strict_granularity: bool,
    records: Option<Vec<TransactionRecord>>,
    source: Option<(&'a dyn RecordSource, PathBuf)>,
    reference_data: Option<&'a dyn ReferenceDataProvider>,
    sink: Option<&'a dyn ReportSink>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference date in `DD.MM.YYYY` form
    pub fn reference_date(mut self, date: &str) -> Self {
        self.reference_date = Some(date.to_string());
        self
    }

    /// One of `M`, `W`, `Y`, `ALL`; defaults to `M`
    pub fn granularity(mut self, flag: &str) -> Self {
        self.granularity = Some(flag.to_string());
        self
    }

    /// Reject unknown granularity flags instead of treating them as `M`
    pub fn strict_granularity(mut self, strict: bool) -> Self {
        self.strict_granularity = strict;
        self
    }

    pub fn records(mut self, records: Vec<TransactionRecord>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn source(mut self, source: &'a dyn RecordSource, path: impl AsRef<Path>) -> Self {
        self.source = Some((source, path.as_ref().to_path_buf()));
        self
    }

    pub fn reference_data(mut self, provider: &'a dyn ReferenceDataProvider) -> Self {
        self.reference_data = Some(provider);
        self
    }

    /// Forward the finished report to `sink` before returning it
    pub fn sink(mut self, sink: &'a dyn ReportSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<Response, ReportError> {
        let ReportBuilder {
            reference_date,
            granularity,
            strict_granularity,
            records,
            source,
            reference_data,
            sink,
        } = self;

        let reference_date =
            reference_date.ok_or_else(|| ReportError::InvalidDateFormat(String::new()))?;
        let granularity = resolve_granularity(granularity.as_deref(), strict_granularity)?;

        let span = info_span!(
            "report",
            reference_date = %reference_date,
            granularity = granularity.as_flag()
        );
        let _guard = span.enter();

        let records = match (records, source) {
            (Some(records), _) => records,
            (None, Some((source, path))) => source.load(&path)?,
            (None, None) => return Err(ReportError::MissingRecords),
        };

        let filtered = filter_by_date_range(&records, &reference_date, granularity)?;
        let (expense_totals, income_totals) = aggregate(filtered);

        let ReferenceData {
            currency_rates,
            stock_prices,
        } = match reference_data {
            Some(provider) => provider.get_rates()?,
            None => ReferenceData::default(),
        };

        let response = Response {
            expenses: reduce_expenses(&expense_totals),
            income: reduce_income(&income_totals),
            currency_rates,
            stock_prices,
        };

        if let Some(sink) = sink {
            sink.save(&response)?;
        }

        info!(
            expenses = %response.expenses.total_amount,
            income = %response.income.total_amount,
            "report built"
        );

        Ok(response)
    }
}

fn resolve_granularity(flag: Option<&str>, strict: bool) -> Result<Granularity, ReportError> {
    match flag {
        None => Ok(Granularity::default()),
        Some(flag) if strict => flag.parse(),
        Some(flag) => {
            let granularity = Granularity::from_flag(flag);
            if granularity.as_flag() != flag {
                warn!(flag, "unknown granularity, using month");
            }
            Ok(granularity)
        }
    }
}
