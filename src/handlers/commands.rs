//! Command and query definitions
//!
//! Raw client input plus the validation that turns it into domain values.
//! Validation collects every violated constraint; it never stops at the
//! first failing field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    within_len, ValidationErrors, CATEGORY_MAX_LEN, CATEGORY_MIN_LEN, RECIPIENT_MAX_LEN,
    RECIPIENT_MIN_LEN,
};
use crate::domain::{Amount, NewTransaction, TransactionType};

// =========================================================================
// CreateTransactionCommand
// =========================================================================

/// Command to record a transaction for the authenticated owner.
///
/// `kind` stays a raw string until validation so an unknown value surfaces
/// as a field violation rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionCommand {
    pub amount: Decimal,
    pub kind: String,
    pub category: String,
    pub recipient: String,
}

impl CreateTransactionCommand {
    pub fn new(amount: Decimal, kind: String, category: String, recipient: String) -> Self {
        Self {
            amount,
            kind,
            category,
            recipient,
        }
    }

    /// Check every field constraint and return either a fully validated
    /// transaction or the complete set of violations.
    pub fn validate(self) -> Result<NewTransaction, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = match Amount::new(self.amount) {
            Ok(amount) => Some(amount),
            Err(_) => {
                errors.push("amount", "Amount must be a positive number.");
                None
            }
        };

        let kind = match self.kind.parse::<TransactionType>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push("type", "Type must be either send or receive.");
                None
            }
        };

        if !within_len(&self.category, CATEGORY_MIN_LEN, CATEGORY_MAX_LEN) {
            errors.push("category", "Category must be between 2 and 50 characters.");
        }

        if !within_len(&self.recipient, RECIPIENT_MIN_LEN, RECIPIENT_MAX_LEN) {
            errors.push(
                "recipient",
                "Recipient must be between 2 and 100 characters.",
            );
        }

        match (amount, kind) {
            (Some(amount), Some(kind)) if errors.is_empty() => Ok(NewTransaction {
                amount,
                kind,
                category: self.category,
                recipient: self.recipient,
            }),
            _ => Err(errors),
        }
    }
}

// =========================================================================
// ListTransactionsQuery
// =========================================================================

/// Query for the authenticated owner's transactions with optional filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTransactionsQuery {
    pub kind: Option<String>,
    pub category: Option<String>,
}

/// Validated filter set for a list query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
}

impl ListTransactionsQuery {
    pub fn new(kind: Option<String>, category: Option<String>) -> Self {
        Self { kind, category }
    }

    /// Validate the optional filters. An invalid type filter is a hard
    /// failure, never a silently ignored filter.
    pub fn validate(self) -> Result<ListFilter, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let kind = match self.kind {
            Some(raw) => match raw.parse::<TransactionType>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.push("type", "Type filter must be send or receive.");
                    None
                }
            },
            None => None,
        };

        let category = match self.category {
            Some(raw) => {
                if !within_len(&raw, CATEGORY_MIN_LEN, CATEGORY_MAX_LEN) {
                    errors.push(
                        "category",
                        "Category filter must be between 2 and 50 characters.",
                    );
                }
                Some(raw)
            }
            None => None,
        };

        if errors.is_empty() {
            Ok(ListFilter { kind, category })
        } else {
            Err(errors)
        }
    }
}
