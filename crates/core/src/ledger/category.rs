//! Fixed category sets for income and expense transactions.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use super::types::TransactionKind;

/// Label of the catch-all expense category.
pub const OTHER_LABEL: &str = "Other";

/// Unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Generates a label-backed category enum with `Display`/`FromStr`.
macro_rules! category_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            SerializeDisplay,
            DeserializeFromStr,
        )]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the set, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Human-readable label, also used on the wire and in storage.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.label() == trimmed)
                    .ok_or_else(|| UnknownCategory(s.to_string()))
            }
        }
    };
}

category_enum! {
    /// Labels an expense transaction (and a budget) may carry.
    ExpenseCategory {
        FoodAndDining => "Food & Dining",
        Shopping => "Shopping",
        BillsAndUtilities => "Bills & Utilities",
        Entertainment => "Entertainment",
        Education => "Education",
        Transportation => "Transportation",
        Healthcare => "Healthcare",
        Travel => "Travel",
        Investment => "Investment",
        PersonalCare => "Personal Care",
        Other => "Other",
    }
}

category_enum! {
    /// Labels an income transaction may carry.
    IncomeCategory {
        Salary => "Salary",
        Business => "Business",
        Investments => "Investments",
        Gifts => "Gifts",
        OtherIncome => "Other Income",
    }
}

/// A category from either set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Category {
    /// An expense category.
    Expense(ExpenseCategory),
    /// An income category.
    Income(IncomeCategory),
}

impl Category {
    /// Bucket used for expenses whose category is absent.
    pub const FALLBACK: Self = Self::Expense(ExpenseCategory::Other);

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expense(c) => c.label(),
            Self::Income(c) => c.label(),
        }
    }

    /// Transaction kind this category belongs to.
    #[must_use]
    pub const fn kind(self) -> TransactionKind {
        match self {
            Self::Expense(_) => TransactionKind::Expense,
            Self::Income(_) => TransactionKind::Income,
        }
    }

    /// Returns the expense category, if this is one.
    #[must_use]
    pub const fn as_expense(self) -> Option<ExpenseCategory> {
        match self {
            Self::Expense(c) => Some(c),
            Self::Income(_) => None,
        }
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Categories order by label so grouped output is alphabetical on ties.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.label().cmp(other.label())
    }
}

impl From<ExpenseCategory> for Category {
    fn from(c: ExpenseCategory) -> Self {
        Self::Expense(c)
    }
}

impl From<IncomeCategory> for Category {
    fn from(c: IncomeCategory) -> Self {
        Self::Income(c)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ExpenseCategory>()
            .map(Self::Expense)
            .or_else(|_| s.parse::<IncomeCategory>().map(Self::Income))
    }
}
