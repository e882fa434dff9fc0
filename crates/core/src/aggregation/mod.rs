//! Grouping of transactions by category and month.

pub mod service;
pub mod types;


pub use service::Aggregator;
pub use types::{
    CategoryTotal, DailyTotal, LedgerSummary, MonthCategoryTotal, MonthTotal, MonthlyTrend,
    SortOrder,
};
