//! Report pipeline: date window filtering, category aggregation and top-N reduction.

pub mod aggregate;
pub mod reduce;
pub mod types;
pub mod window;

pub mod prelude {
    pub use super::aggregate::{CategoryTotals, UNCATEGORIZED, aggregate, normalize_category};
    pub use super::reduce::{
        MAIN_CATEGORY_LIMIT, OTHER_CATEGORY, TRANSFERS_AND_CASH, reduce_expenses, reduce_income,
        round_amount,
    };
    pub use super::types::*;
    pub use super::window::{
        DateWindow, Granularity, REFERENCE_DATE_FORMAT, filter_by_date_range, filter_by_window,
        parse_reference_date,
    };
}
