//! Identity verification
//!
//! The capability the authorization middleware depends on: turn an opaque
//! bearer credential into a verified subject identifier. The production
//! implementation delegates to an external identity provider over HTTP;
//! tests substitute a deterministic verifier.

mod provider;

pub use provider::HttpIdentityVerifier;

use async_trait::async_trait;

use crate::domain::SubjectId;

/// Verification failures.
///
/// Every variant resolves to the same authentication-failure outcome for the
/// caller; the distinction exists only for logging.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Credential rejected by identity provider")]
    Unauthenticated,

    #[error("Identity provider unreachable: {0}")]
    ProviderUnreachable(String),
}

/// Verifies an opaque bearer credential against an identity provider.
///
/// Called exactly once per request by the authorization middleware; no retry.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<SubjectId, AuthError>;
}
