//! Ledger error types for boundary validation.
//!
//! The analytics themselves are total; these errors only arise when a
//! draft or a stored record violates the data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::category::UnknownCategory;
use super::period::YearMonthParseError;
use super::types::TransactionKind;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Largest amount or monthly limit a record may carry, `999999999999.99`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Decimal places kept for amounts and limits.
pub const AMOUNT_SCALE: u32 = 2;

/// Errors raised while validating or converting ledger records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Description is empty or whitespace.
    #[error("Description is required")]
    EmptyDescription,

    /// Description exceeds the maximum length.
    #[error("Description must be at most {MAX_DESCRIPTION_LEN} characters (got {0})")]
    DescriptionTooLong(usize),

    /// Amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount is too large or too precise to store.
    #[error("Amount exceeds {MAX_AMOUNT} or has more than {AMOUNT_SCALE} decimal places")]
    AmountOutOfRange,

    /// Budget limit is zero or negative.
    #[error("Monthly limit must be greater than zero")]
    NonPositiveLimit,

    /// Budget limit is too large or too precise to store.
    #[error("Monthly limit exceeds {MAX_AMOUNT} or has more than {AMOUNT_SCALE} decimal places")]
    LimitOutOfRange,

    /// Date falls outside the four-digit years a month can be written in.
    #[error("Date {0} must fall between years 1000 and 9999")]
    DateOutOfRange(NaiveDate),

    /// Category does not belong to the transaction kind's set.
    #[error("Category '{category}' is not a valid {kind} category")]
    CategoryKindMismatch {
        /// Offending category label.
        category: String,
        /// Transaction kind.
        kind: TransactionKind,
    },

    /// A signed stored amount disagrees with its transaction kind.
    #[error("Amount {amount} does not match transaction type {kind}")]
    SignMismatch {
        /// Stored signed amount.
        amount: Decimal,
        /// Stored kind.
        kind: TransactionKind,
    },

    /// Unrecognized transaction type.
    #[error("Invalid transaction type '{0}': expected income or expense")]
    UnknownKind(String),

    /// Unrecognized category label.
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// Malformed `YYYY-MM` month.
    #[error(transparent)]
    InvalidMonth(#[from] YearMonthParseError),
}

impl From<LedgerError> for pocketbook_shared::AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::SignMismatch { .. } => Self::Internal(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
