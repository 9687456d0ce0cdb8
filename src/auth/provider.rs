//! HTTP identity provider client
//!
//! Verifies bearer tokens against the external identity provider's
//! token-verification endpoint. The provider is a black box: only the
//! success/failure contract matters here.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{AuthError, IdentityVerifier};
use crate::domain::SubjectId;

/// Successful verification payload from the provider.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    /// Subject identifier of the token's owner
    sub: String,
}

/// HTTP client for the external identity provider.
#[derive(Clone)]
pub struct HttpIdentityVerifier {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl HttpIdentityVerifier {
    /// Creates a verifier for the provider at `base_url`, authenticated with
    /// the provider secret key. Every verification call is bounded by
    /// `timeout`; expiry counts as an authentication failure.
    pub fn new(base_url: String, secret_key: String, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_default();

        HttpIdentityVerifier {
            client,
            base_url,
            secret_key,
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, credential: &str) -> Result<SubjectId, AuthError> {
        let url = format!("{}/v1/tokens/verify", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&serde_json::json!({ "token": credential }))
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Unauthenticated);
        }

        let payload = response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(e.to_string()))?;

        Ok(SubjectId::new(payload.sub))
    }
}
