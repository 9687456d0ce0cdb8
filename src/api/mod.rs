//! API module
//!
//! HTTP API endpoints, middleware, and shared state.

pub mod middleware;
pub mod routes;

pub use routes::create_router;

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::IdentityVerifier;

/// Shared application state, injected at startup.
///
/// The pool and verifier are the only resources shared across requests;
/// neither carries per-request data.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    pub fn new(pool: PgPool, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { pool, verifier }
    }
}
