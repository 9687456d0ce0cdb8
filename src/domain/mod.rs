//! Domain module
//!
//! Core domain types and validation logic.

pub mod amount;
pub mod context;
pub mod transaction;
pub mod validation;

pub use amount::{Amount, AmountError};
pub use context::{RequestContext, SubjectId};
pub use transaction::{
    CategorySummary, NewTransaction, Transaction, TransactionType, UnknownTransactionType,
};
pub use validation::{FieldViolation, ValidationErrors};
