//! Transaction entity
//!
//! The single persisted entity: an owner-scoped money movement that is
//! immutable once created.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Amount;

/// Direction of a transaction. Exactly two values exist; nothing else is
/// ever persisted or reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Send,
    Receive,
}

/// Error for strings that name neither `send` nor `receive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Send => "send",
            TransactionType::Receive => "receive",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send" => Ok(TransactionType::Send),
            "receive" => Ok(TransactionType::Receive),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// A persisted transaction record.
///
/// `owner_id` is set exactly once, from the verified identity of the request
/// that created the record. Records are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub owner_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub recipient: String,
    pub created_at: DateTime<Utc>,
}

/// A validated transaction ready to be persisted.
///
/// Produced only by command validation; the owner is supplied separately by
/// the request context at insert time, never by the client.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Amount,
    pub kind: TransactionType,
    pub category: String,
    pub recipient: String,
}

/// Derived per-category totals. Never persisted; recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub sent: Decimal,
    pub received: Decimal,
}
