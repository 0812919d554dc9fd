//! Identity Toolkit client
//!
//! The two account operations the gateway needs: resolve a user by email
//! and replace a user's password. Calls are not retried; a failure is
//! surfaced to the caller with an enhanced message.

use std::sync::Arc;

use anyhow::bail;
use reqwest::Client;

use crate::firebase::errors::enhance_auth_error_body;
use crate::firebase::model::{
    LookupRequest, LookupResponse, UpdateAccountRequest, UpdateAccountResponse, UserRecord,
};
use crate::google::TokenManager;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Identity Toolkit client
pub struct FirebaseAuthClient {
    token_manager: Arc<TokenManager>,
    client: Client,
    base_url: String,
}

impl FirebaseAuthClient {
    /// Create a client against the production endpoint
    pub fn new(token_manager: Arc<TokenManager>, client: Client) -> Self {
        Self::with_base_url(token_manager, client, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate endpoint (tests, Auth emulator)
    pub fn with_base_url(
        token_manager: Arc<TokenManager>,
        client: Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            token_manager,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn accounts_url(&self, operation: &str) -> String {
        format!(
            "{}/v1/projects/{}/accounts:{}",
            self.base_url,
            self.token_manager.project_id(),
            operation
        )
    }

    /// Resolve the account whose email matches exactly
    ///
    /// A well-formed response with no matching account is reported with the
    /// same message the provider uses for unknown identifiers.
    pub async fn get_user_by_email(&self, email: &str) -> anyhow::Result<UserRecord> {
        let token = self.token_manager.ensure_valid_token().await?;

        let response = self
            .client
            .post(self.accounts_url("lookup"))
            .bearer_auth(token)
            .json(&LookupRequest {
                email: vec![email.to_string()],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                // Cached token no longer accepted upstream
                self.token_manager.invalidate();
            }
            tracing::warn!(%status, email, "accounts:lookup failed");
            bail!("{}", enhance_auth_error_body(&body));
        }

        let lookup: LookupResponse = response.json().await?;
        match lookup.users.into_iter().next() {
            Some(user) => {
                tracing::debug!(uid = %user.local_id, "Resolved account by email");
                Ok(user)
            }
            None => bail!("There is no user record corresponding to the provided identifier."),
        }
    }

    /// Replace the password of the account identified by `local_id`
    pub async fn update_user_password(
        &self,
        local_id: &str,
        new_password: &str,
    ) -> anyhow::Result<()> {
        let token = self.token_manager.ensure_valid_token().await?;

        let response = self
            .client
            .post(self.accounts_url("update"))
            .bearer_auth(token)
            .json(&UpdateAccountRequest {
                local_id: local_id.to_string(),
                password: Some(new_password.to_string()),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                self.token_manager.invalidate();
            }
            tracing::warn!(%status, uid = %local_id, "accounts:update failed");
            bail!("{}", enhance_auth_error_body(&body));
        }

        let updated: UpdateAccountResponse = response.json().await?;
        tracing::info!(uid = %updated.local_id, "Password updated");
        Ok(())
    }
}
