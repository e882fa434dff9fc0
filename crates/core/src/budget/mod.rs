//! Monthly budgets and budget-vs-actual comparison.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BudgetComparator;
pub use types::{Budget, BudgetComparison, BudgetDraft, BudgetStatus};
