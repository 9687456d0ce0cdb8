//! Create Transaction Handler
//!
//! Validates and persists new transaction records under the authenticated
//! owner.

use sqlx::PgPool;

use crate::domain::{RequestContext, Transaction};
use crate::error::AppError;
use crate::store::TransactionStore;

use super::CreateTransactionCommand;

/// Handler for recording transactions.
pub struct CreateTransactionHandler {
    store: TransactionStore,
}

impl CreateTransactionHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: TransactionStore::new(pool),
        }
    }

    /// Execute the create command.
    ///
    /// Validation runs before anything touches the store; a rejected command
    /// leaves no partial write behind. The owner is always the context's
    /// verified subject, regardless of anything in the client payload.
    pub async fn execute(
        &self,
        command: CreateTransactionCommand,
        context: &RequestContext,
    ) -> Result<Transaction, AppError> {
        let new = command.validate()?;

        let record = self.store.insert(&context.subject_id, new).await?;

        tracing::debug!(
            transaction_id = record.id,
            subject = %context.subject_id,
            correlation_id = %context.correlation_id,
            "Transaction recorded"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_command_construction() {
        let cmd = CreateTransactionCommand::new(
            dec!(100.50),
            "send".to_string(),
            "groceries".to_string(),
            "corner shop".to_string(),
        );

        assert_eq!(cmd.amount, dec!(100.50));
        assert_eq!(cmd.kind, "send");
    }
}
