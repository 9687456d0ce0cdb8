//! Request handlers module
//!
//! Command/query handlers that orchestrate validation and the transaction
//! store. Each handler owns its gateway and takes the request context
//! explicitly.

mod commands;
mod create_handler;
mod list_handler;
mod summary_handler;

pub use commands::{CreateTransactionCommand, ListFilter, ListTransactionsQuery};
pub use create_handler::CreateTransactionHandler;
pub use list_handler::ListTransactionsHandler;
pub use summary_handler::{fold_grouped_totals, SummaryHandler};
