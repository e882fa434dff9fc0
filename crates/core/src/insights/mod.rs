//! Month-to-date spending insights.

pub mod service;
pub mod types;


pub use service::InsightDeriver;
pub use types::{SpendingInsights, TopCategory};
