//! Request Context
//!
//! The verified identity and tracing metadata for one request. Built by the
//! authorization middleware after credential verification and threaded
//! explicitly through every handler call; nothing outside a single request
//! ever holds it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The stable identity of an authenticated caller, established once per
/// request and used to scope all data access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context for a single authorized request.
///
/// The subject id here is the only source of truth for ownership on writes
/// and the only filter value on reads.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Verified subject performing the request
    pub subject_id: SubjectId,

    /// Correlation ID for request tracing
    pub correlation_id: Uuid,
}

impl RequestContext {
    /// Create a context for a verified subject with a fresh correlation ID.
    pub fn new(subject_id: SubjectId) -> Self {
        Self {
            subject_id,
            correlation_id: Uuid::new_v4(),
        }
    }

    /// Replace the correlation ID (e.g. with one supplied by the caller).
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = correlation_id;
        self
    }
}
