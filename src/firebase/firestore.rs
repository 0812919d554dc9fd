//! Firestore REST client
//!
//! Only the two document operations the notification path needs: read a
//! user directory document and create a notification record. Field values
//! use Firestore's typed-value JSON encoding.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use http::StatusCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::google::TokenManager;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// A Firestore typed value
///
/// Firestore encodes every field as `{"<type>Value": ...}`. Modelled as a
/// struct with one optional slot per type we use, which is tolerant of
/// documents carrying types we don't read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FsValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
}

impl FsValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            boolean_value: Some(value),
            ..Default::default()
        }
    }

    pub fn timestamp(value: impl Into<String>) -> Self {
        Self {
            timestamp_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.string_value.as_deref()
    }
}

/// A Firestore document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Full resource name, absent on create requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub fields: HashMap<String, FsValue>,
}

/// User directory record stored under `users/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryUser {
    pub user_id: String,
    pub full_name: Option<String>,
    pub fcm_token: Option<String>,
}

impl DirectoryUser {
    fn from_document(user_id: &str, document: &Document) -> Self {
        let field = |name: &str| {
            document
                .fields
                .get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            user_id: field("userId").unwrap_or_else(|| user_id.to_string()),
            full_name: field("fullName"),
            fcm_token: field("fcmToken"),
        }
    }
}

/// Firestore client
pub struct FirestoreClient {
    token_manager: Arc<TokenManager>,
    client: Client,
    base_url: String,
}

impl FirestoreClient {
    /// Create a client against the production endpoint
    pub fn new(token_manager: Arc<TokenManager>, client: Client) -> Self {
        Self::with_base_url(token_manager, client, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate endpoint (tests, emulator)
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

    fn document_url(&self, path: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url,
            self.token_manager.project_id(),
            path
        )
    }

    /// Fetch a document, `None` when it does not exist
    pub async fn get_document(&self, path: &str) -> anyhow::Result<Option<Document>> {
        let token = self.token_manager.ensure_valid_token().await?;

        let response = self
            .client
            .get(self.document_url(path))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::UNAUTHORIZED {
                self.token_manager.invalidate();
            }
            bail!("Firestore read failed for {}: {} {}", path, status, body);
        }

        Ok(Some(response.json().await?))
    }

    /// Create a document with an explicit id under `{parent}/{collection}`
    pub async fn create_document(
        &self,
        parent: &str,
        collection: &str,
        document_id: &str,
        fields: HashMap<String, FsValue>,
    ) -> anyhow::Result<()> {
        let token = self.token_manager.ensure_valid_token().await?;

        let url = format!("{}/{}", self.document_url(parent), collection);
        let response = self
            .client
            .post(&url)
            .query(&[("documentId", document_id)])
            .bearer_auth(token)
            .json(&Document { name: None, fields })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::UNAUTHORIZED {
                self.token_manager.invalidate();
            }
            bail!(
                "Firestore write failed for {}/{}/{}: {} {}",
                parent,
                collection,
                document_id,
                status,
                body
            );
        }

        tracing::debug!(parent, collection, document_id, "Document created");
        Ok(())
    }

    /// Resolve a user directory record
    pub async fn get_user(&self, user_id: &str) -> anyhow::Result<DirectoryUser> {
        if user_id.is_empty() {
            bail!("User ID cannot be empty");
        }

        match self.get_document(&format!("users/{}", user_id)).await? {
            Some(document) => {
                let user = DirectoryUser::from_document(user_id, &document);
                tracing::debug!(
                    user_id = %user.user_id,
                    full_name = user.full_name.as_deref().unwrap_or(""),
                    "Directory user resolved"
                );
                Ok(user)
            }
            None => bail!("User not found with ID: {}", user_id),
        }
    }
}
