//! Ledger domain: transactions, categories, months, and boundary validation.

pub mod category;
pub mod error;
pub mod filter;
pub mod period;
pub mod types;
pub mod validation;

pub use category::{Category, ExpenseCategory, IncomeCategory, OTHER_LABEL, UnknownCategory};
pub use error::{AMOUNT_SCALE, LedgerError, MAX_AMOUNT, MAX_DESCRIPTION_LEN};
pub use filter::TransactionFilter;
pub use period::{MonthWindow, YearMonth, YearMonthParseError};
pub use types::{Transaction, TransactionDraft, TransactionKind};
pub use validation::{validate_budget, validate_transaction};
