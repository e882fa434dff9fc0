//! Core ledger analytics for Pocketbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types, validation rules, and the analytics live here.
//!
//! # Modules
//!
//! - `ledger` - Transactions, categories, months and boundary validation
//! - `aggregation` - Grouping and summing of expenses and income
//! - `budget` - Monthly budgets and budget-vs-actual comparison
//! - `insights` - Month-to-date spending insights

pub mod aggregation;
pub mod budget;
pub mod insights;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_support;
