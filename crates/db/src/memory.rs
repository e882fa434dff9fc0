//! In-process store for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use pocketbook_core::budget::{Budget, BudgetDraft};
use pocketbook_core::ledger::{Transaction, TransactionDraft, TransactionFilter};
use pocketbook_shared::types::{BudgetId, TransactionId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::{
    BudgetFilter, LedgerStore, StoreError, StoreResult, sort_budgets, sort_transactions,
};

#[derive(Debug, Default)]
struct State {
    transactions: HashMap<TransactionId, Transaction>,
    budgets: HashMap<BudgetId, Budget>,
}

impl State {
    /// Fails if another budget already covers the draft's (category, month).
    fn ensure_unique(&self, draft: &BudgetDraft, except: Option<BudgetId>) -> StoreResult<()> {
        let taken = self.budgets.values().any(|b| {
            Some(b.id) != except && b.category == draft.category && b.month == draft.month
        });
        if taken {
            return Err(StoreError::DuplicateBudget {
                category: draft.category,
                month: draft.month,
            });
        }
        Ok(())
    }
}

/// Ledger store held in memory behind a read-write lock.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_transactions(&self, filter: &TransactionFilter) -> StoreResult<Vec<Transaction>> {
        let state = self.state.read().await;
        let mut transactions: Vec<Transaction> = state
            .transactions
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        sort_transactions(&mut transactions);
        Ok(transactions)
    }

    async fn get_transaction(&self, id: TransactionId) -> StoreResult<Option<Transaction>> {
        Ok(self.state.read().await.transactions.get(&id).cloned())
    }

    async fn create_transaction(&self, draft: TransactionDraft) -> StoreResult<Transaction> {
        let transaction = Transaction::from_draft(TransactionId::new(), draft, Utc::now());
        self.state
            .write()
            .await
            .transactions
            .insert(transaction.id, transaction.clone());
        debug!(id = %transaction.id, "Stored transaction");
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> StoreResult<Option<Transaction>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.transactions.remove(&id) else {
            return Ok(None);
        };
        let updated = existing.replaced_by(draft, Utc::now());
        state.transactions.insert(id, updated.clone());
        debug!(id = %id, "Replaced transaction");
        Ok(Some(updated))
    }

    async fn delete_transaction(&self, id: TransactionId) -> StoreResult<bool> {
        Ok(self.state.write().await.transactions.remove(&id).is_some())
    }

    async fn list_budgets(&self, filter: &BudgetFilter) -> StoreResult<Vec<Budget>> {
        let state = self.state.read().await;
        let mut budgets: Vec<Budget> = state
            .budgets
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        sort_budgets(&mut budgets);
        Ok(budgets)
    }

    async fn get_budget(&self, id: BudgetId) -> StoreResult<Option<Budget>> {
        Ok(self.state.read().await.budgets.get(&id).cloned())
    }

    async fn create_budget(&self, draft: BudgetDraft) -> StoreResult<Budget> {
        let mut state = self.state.write().await;
        state.ensure_unique(&draft, None)?;
        let budget = Budget::from_draft(BudgetId::new(), draft, Utc::now());
        state.budgets.insert(budget.id, budget.clone());
        debug!(
            id = %budget.id,
            category = %budget.category,
            month = %budget.month,
            "Stored budget"
        );
        Ok(budget)
    }

    async fn update_budget(&self, id: BudgetId, draft: BudgetDraft) -> StoreResult<Option<Budget>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.budgets.get(&id).cloned() else {
            return Ok(None);
        };
        state.ensure_unique(&draft, Some(id))?;
        let updated = existing.replaced_by(draft, Utc::now());
        state.budgets.insert(id, updated.clone());
        debug!(id = %id, "Replaced budget");
        Ok(Some(updated))
    }

    async fn delete_budget(&self, id: BudgetId) -> StoreResult<bool> {
        Ok(self.state.write().await.budgets.remove(&id).is_some())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
