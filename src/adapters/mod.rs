pub mod csv;
pub mod settings;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::settings::{StubReferenceData, UserSettings};
    pub use super::traits::{RecordSource, ReferenceDataProvider, ReportSink};
}
