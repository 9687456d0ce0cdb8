//! Transaction store
//!
//! Owner-scoped persistence gateway over Postgres. Every query here takes the
//! subject id explicitly; there is no ambient owner state on the pool or
//! anywhere else.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{NewTransaction, SubjectId, Transaction, TransactionType};

/// Raw row shape shared by insert/list queries.
type TransactionRow = (i64, String, Decimal, String, String, String, DateTime<Utc>);

/// One store-side `(category, type, SUM(amount))` aggregate row.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTotal {
    pub category: String,
    pub kind: TransactionType,
    pub total: Decimal,
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored transaction has unknown type '{0}'")]
    UnknownType(String),
}

/// Persistence gateway for transaction records.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    pool: PgPool,
}

impl TransactionStore {
    /// Create a new TransactionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one transaction under `owner`. The id and creation timestamp
    /// are assigned by the database.
    pub async fn insert(
        &self,
        owner: &SubjectId,
        new: NewTransaction,
    ) -> Result<Transaction, StoreError> {
        let row: TransactionRow = sqlx::query_as(
            r#"
            INSERT INTO transactions (owner_id, amount, type, category, recipient)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, amount, type, category, recipient, created_at
            "#,
        )
        .bind(owner.as_str())
        .bind(new.amount.value())
        .bind(new.kind.as_str())
        .bind(&new.category)
        .bind(&new.recipient)
        .fetch_one(&self.pool)
        .await?;

        map_row(row)
    }

    /// List `owner`'s transactions, most recent first. Optional filters
    /// narrow by exact type and/or category match (logical AND).
    pub async fn list(
        &self,
        owner: &SubjectId,
        kind: Option<TransactionType>,
        category: Option<&str>,
    ) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<TransactionRow> = match (kind, category) {
            (Some(kind), Some(category)) => {
                sqlx::query_as(
                    r#"
                    SELECT id, owner_id, amount, type, category, recipient, created_at
                    FROM transactions
                    WHERE owner_id = $1 AND type = $2 AND category = $3
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(owner.as_str())
                .bind(kind.as_str())
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(kind), None) => {
                sqlx::query_as(
                    r#"
                    SELECT id, owner_id, amount, type, category, recipient, created_at
                    FROM transactions
                    WHERE owner_id = $1 AND type = $2
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(owner.as_str())
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(category)) => {
                sqlx::query_as(
                    r#"
                    SELECT id, owner_id, amount, type, category, recipient, created_at
                    FROM transactions
                    WHERE owner_id = $1 AND category = $2
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(owner.as_str())
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query_as(
                    r#"
                    SELECT id, owner_id, amount, type, category, recipient, created_at
                    FROM transactions
                    WHERE owner_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(owner.as_str())
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(map_row).collect()
    }

    /// Per-(category, type) amount sums for `owner`, computed by the
    /// database. Category cardinality may be large and row counts unbounded,
    /// so the grouping never happens client-side.
    pub async fn grouped_totals(&self, owner: &SubjectId) -> Result<Vec<GroupedTotal>, StoreError> {
        let rows: Vec<(String, String, Decimal)> = sqlx::query_as(
            r#"
            SELECT category, type, SUM(amount) AS total
            FROM transactions
            WHERE owner_id = $1
            GROUP BY category, type
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(category, kind, total)| {
                let kind = kind
                    .parse::<TransactionType>()
                    .map_err(|e| StoreError::UnknownType(e.0))?;
                Ok(GroupedTotal {
                    category,
                    kind,
                    total,
                })
            })
            .collect()
    }
}

fn map_row(row: TransactionRow) -> Result<Transaction, StoreError> {
    let (id, owner_id, amount, kind, category, recipient, created_at) = row;
    let kind = kind
        .parse::<TransactionType>()
        .map_err(|e| StoreError::UnknownType(e.0))?;

    Ok(Transaction {
        id,
        owner_id,
        amount,
        kind,
        category,
        recipient,
        created_at,
    })
}
