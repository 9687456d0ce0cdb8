//! Field validation
//!
//! Constraint checks collect every violation into a single structured value;
//! a response never reports just the first failing field.

use serde::Serialize;
use std::fmt;

/// Category label length bounds (characters)
pub const CATEGORY_MIN_LEN: usize = 2;
pub const CATEGORY_MAX_LEN: usize = 50;

/// Recipient description length bounds (characters)
pub const RECIPIENT_MIN_LEN: usize = 2;
pub const RECIPIENT_MAX_LEN: usize = 100;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// All constraint violations found in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// One message per violated field, in the order the checks ran.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Character-count bounds check shared by category/recipient constraints.
pub fn within_len(value: &str, min: usize, max: usize) -> bool {
    let count = value.chars().count();
    count >= min && count <= max
}
