//! Transaction domain types.
//!
//! Internally an amount is always an unsigned magnitude paired with an
//! explicit [`TransactionKind`]. The signed convention (expenses negative,
//! income positive) exists only at the storage boundary, see
//! [`TransactionKind::signed`] and [`TransactionKind::magnitude_of`].

use chrono::{DateTime, NaiveDate, Utc};
use pocketbook_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::LedgerError;

/// Direction of money flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionKind {
    /// Wire and storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Applies the storage sign convention to a magnitude.
    #[must_use]
    pub fn signed(self, magnitude: Decimal) -> Decimal {
        match self {
            Self::Income => magnitude.abs(),
            Self::Expense => -magnitude.abs(),
        }
    }

    /// Recovers the magnitude of a signed stored amount.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::SignMismatch` if a non-zero amount carries the
    /// wrong sign for this kind.
    pub fn magnitude_of(self, signed: Decimal) -> Result<Decimal, LedgerError> {
        let agrees = signed.is_zero()
            || match self {
                Self::Income => signed.is_sign_positive(),
                Self::Expense => signed.is_sign_negative(),
            };
        if agrees {
            Ok(signed.abs())
        } else {
            Err(LedgerError::SignMismatch {
                amount: signed,
                kind: self,
            })
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::UnknownKind(s.to_string())),
        }
    }
}

/// A recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Unsigned magnitude.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category; `None` when the stored label is absent or unrecognized.
    pub category: Option<Category>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a new transaction from a validated draft. The date defaults to
    /// the day of `now`.
    #[must_use]
    pub fn from_draft(id: TransactionId, draft: TransactionDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: draft.amount.abs(),
            description: draft.description.trim().to_string(),
            date: draft.date.unwrap_or_else(|| now.date_naive()),
            kind: draft.kind,
            category: Some(draft.category),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every user-editable field, keeping id and creation time.
    #[must_use]
    pub fn replaced_by(self, draft: TransactionDraft, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            ..Self::from_draft(self.id, draft, now)
        }
    }

    /// Amount under the storage sign convention.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }

    /// Returns true for expenses.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Category used for grouping; absent categories fall back to `Other`.
    #[must_use]
    pub fn category_or_other(&self) -> Category {
        self.category.unwrap_or(Category::FALLBACK)
    }
}

/// User-supplied fields of a transaction, for create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// Unsigned magnitude.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Date; `None` means today.
    pub date: Option<NaiveDate>,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Category from the kind's set.
    pub category: Category,
}
