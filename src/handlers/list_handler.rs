//! List Transactions Handler
//!
//! Resolves filtered list queries against the store, always scoped to the
//! authenticated owner.

use sqlx::PgPool;

use crate::domain::{RequestContext, Transaction};
use crate::error::AppError;
use crate::store::TransactionStore;

use super::ListTransactionsQuery;

/// Handler for list queries.
pub struct ListTransactionsHandler {
    store: TransactionStore,
}

impl ListTransactionsHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: TransactionStore::new(pool),
        }
    }

    /// Execute the list query. Filter validation runs before any query; an
    /// invalid type filter never reaches the store. No matches yield an
    /// empty vec, never an error.
    pub async fn execute(
        &self,
        query: ListTransactionsQuery,
        context: &RequestContext,
    ) -> Result<Vec<Transaction>, AppError> {
        let filter = query.validate()?;

        let records = self
            .store
            .list(
                &context.subject_id,
                filter.kind,
                filter.category.as_deref(),
            )
            .await?;

        Ok(records)
    }
}
