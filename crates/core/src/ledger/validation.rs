//! Business rule validation for records entering the system.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::error::{AMOUNT_SCALE, LedgerError, MAX_AMOUNT, MAX_DESCRIPTION_LEN};
use super::period::YearMonth;
use super::types::TransactionDraft;
use crate::budget::BudgetDraft;

/// Returns true when `value` is at most `MAX_AMOUNT` with at most
/// `AMOUNT_SCALE` significant decimal places.
fn storable(value: Decimal) -> bool {
    value <= MAX_AMOUNT && value.normalize().scale() <= AMOUNT_SCALE
}

/// Validates a transaction draft.
///
/// # Errors
///
/// Returns an error if the amount is not positive or not storable, the
/// date lies outside years 1000-9999, the description is empty or too
/// long, or the category belongs to the other kind's set.
pub fn validate_transaction(draft: &TransactionDraft) -> Result<(), LedgerError> {
    if draft.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    if !storable(draft.amount) {
        return Err(LedgerError::AmountOutOfRange);
    }
    if let Some(date) = draft
        .date
        .filter(|d| YearMonth::new(d.year(), d.month()).is_none())
    {
        return Err(LedgerError::DateOutOfRange(date));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(LedgerError::DescriptionTooLong(len));
    }

    if draft.category.kind() != draft.kind {
        return Err(LedgerError::CategoryKindMismatch {
            category: draft.category.label().to_string(),
            kind: draft.kind,
        });
    }

    Ok(())
}

/// Validates a budget draft.
///
/// # Errors
///
/// Returns an error if the monthly limit is not positive or not storable.
pub fn validate_budget(draft: &BudgetDraft) -> Result<(), LedgerError> {
    if draft.monthly_limit <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveLimit);
    }
    if !storable(draft.monthly_limit) {
        return Err(LedgerError::LimitOutOfRange);
    }
    Ok(())
}
