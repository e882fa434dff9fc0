//! `SeaORM` entity definitions.

pub mod budgets;
pub mod transactions;

pub mod prelude {
    //! Entity re-exports.
    pub use super::budgets::Entity as Budgets;
    pub use super::transactions::Entity as Transactions;
}
