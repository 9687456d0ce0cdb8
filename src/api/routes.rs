//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{CategorySummary, RequestContext, Transaction};
use crate::error::AppError;
use crate::handlers::{
    CreateTransactionCommand, CreateTransactionHandler, ListTransactionsHandler,
    ListTransactionsQuery, SummaryHandler,
};

use super::AppState;

// =========================================================================
// Request types
// =========================================================================

/// Body of POST /transactions.
///
/// Deliberately has no owner field: any `owner_id`/`userId` a client sends
/// is dropped at deserialization, and ownership comes from the verified
/// request context alone.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub recipient: String,
}

/// Query parameters of GET /transactions.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListTransactionsParams {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            post(create_transaction).get(list_transactions),
        )
        .route("/transactions/summary", get(transaction_summary))
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Record a transaction for the authenticated owner
async fn create_transaction(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let handler = CreateTransactionHandler::new(state.pool.clone());

    let command = CreateTransactionCommand::new(
        request.amount,
        request.kind,
        request.category,
        request.recipient,
    );

    let record = handler.execute(command, &context).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

// =========================================================================
// GET /transactions
// =========================================================================

/// List the authenticated owner's transactions, optionally filtered
async fn list_transactions(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Query(params): Query<ListTransactionsParams>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let handler = ListTransactionsHandler::new(state.pool.clone());

    let query = ListTransactionsQuery::new(params.kind, params.category);

    let records = handler.execute(query, &context).await?;

    Ok(Json(records))
}

// =========================================================================
// GET /transactions/summary
// =========================================================================

/// Per-category sent/received totals for the authenticated owner
async fn transaction_summary(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    let handler = SummaryHandler::new(state.pool.clone());

    let rows = handler.execute(&context).await?;

    Ok(Json(rows))
}
