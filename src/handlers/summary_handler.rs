//! Summary Handler
//!
//! Turns store-side `(category, type, sum)` aggregates into one
//! `{category, sent, received}` row per distinct category.

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::BTreeMap;

use crate::domain::{CategorySummary, RequestContext, TransactionType};
use crate::error::AppError;
use crate::store::{GroupedTotal, TransactionStore};

/// Handler for summary queries.
pub struct SummaryHandler {
    store: TransactionStore,
}

impl SummaryHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: TransactionStore::new(pool),
        }
    }

    /// Execute the summary query. The grouped retrieval happens in the
    /// database; only the per-category fold runs here. An owner with no
    /// transactions gets an empty vec.
    pub async fn execute(
        &self,
        context: &RequestContext,
    ) -> Result<Vec<CategorySummary>, AppError> {
        let totals = self.store.grouped_totals(&context.subject_id).await?;

        Ok(fold_grouped_totals(totals))
    }
}

/// Fold grouped sums into one row per category: `send` totals accumulate
/// into `sent`, `receive` into `received`, missing sides stay zero.
/// Categories are discovered from the data; callers must not rely on row
/// order.
pub fn fold_grouped_totals(totals: Vec<GroupedTotal>) -> Vec<CategorySummary> {
    let mut by_category: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

    for row in totals {
        let entry = by_category
            .entry(row.category)
            .or_insert((Decimal::ZERO, Decimal::ZERO));

        match row.kind {
            TransactionType::Send => entry.0 += row.total,
            TransactionType::Receive => entry.1 += row.total,
        }
    }

    by_category
        .into_iter()
        .map(|(category, (sent, received))| CategorySummary {
            category,
            sent,
            received,
        })
        .collect()
}
