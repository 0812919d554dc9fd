//! FCM HTTP v1 client
//!
//! Push delivery to a single device registration token, matching what the
//! Android client expects: high-priority Android config, default sound,
//! a fixed notification channel and a string data payload.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::google::TokenManager;

const DEFAULT_BASE_URL: &str = "https://fcm.googleapis.com";

/// Notification channel the Android app registers for forum events
const ANDROID_CHANNEL_ID: &str = "forumus_notifications";

/// Notification bodies longer than this are truncated before send
const MAX_BODY_CHARS: usize = 100;

#[derive(Debug, Serialize)]
struct SendRequest {
    message: FcmMessage,
}

#[derive(Debug, Serialize)]
struct FcmMessage {
    token: String,
    notification: FcmNotification,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    data: HashMap<String, String>,
    android: AndroidConfig,
}

#[derive(Debug, Serialize)]
struct FcmNotification {
    title: String,
    body: String,
}

#[derive(Debug, Serialize)]
struct AndroidConfig {
    priority: &'static str,
    notification: AndroidNotification,
}

#[derive(Debug, Serialize)]
struct AndroidNotification {
    sound: &'static str,
    channel_id: &'static str,
}

/// messages:send response body
#[derive(Debug, Deserialize)]
struct SendResponse {
    /// Resource name of the delivered message
    name: String,
}

/// FCM client
pub struct MessagingClient {
    token_manager: Arc<TokenManager>,
    client: Client,
    base_url: String,
}

impl MessagingClient {
    /// Create a client against the production endpoint
    pub fn new(token_manager: Arc<TokenManager>, client: Client) -> Self {
        Self::with_base_url(token_manager, client, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate endpoint (tests)
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

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.base_url,
            self.token_manager.project_id()
        )
    }

    /// Send a push notification to a device registration token
    ///
    /// Returns the delivered message name on success.
    pub async fn send_to_token(
        &self,
        registration_token: &str,
        title: &str,
        body: &str,
        data: HashMap<String, String>,
    ) -> anyhow::Result<String> {
        let token = self.token_manager.ensure_valid_token().await?;

        let request = SendRequest {
            message: FcmMessage {
                token: registration_token.to_string(),
                notification: FcmNotification {
                    title: title.to_string(),
                    body: truncate(body, MAX_BODY_CHARS),
                },
                data,
                android: AndroidConfig {
                    priority: "HIGH",
                    notification: AndroidNotification {
                        sound: "default",
                        channel_id: ANDROID_CHANNEL_ID,
                    },
                },
            },
        };

        let response = self
            .client
            .post(self.send_url())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                self.token_manager.invalidate();
            }
            let error_code = extract_fcm_error_code(&body);
            tracing::warn!(%status, error_code = %error_code, "FCM send failed");

            match error_code.as_str() {
                "UNREGISTERED" => bail!("Registration token is no longer valid"),
                "INVALID_ARGUMENT" => bail!("Invalid message or registration token"),
                "QUOTA_EXCEEDED" => bail!("FCM sending quota exceeded"),
                _ => bail!("FCM send failed: {} {}", status, body),
            }
        }

        let sent: SendResponse = response.json().await?;
        tracing::info!(message = %sent.name, "Push notification delivered");
        Ok(sent.name)
    }
}

/// Pull the FCM error code out of the v1 error envelope
fn extract_fcm_error_code(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return "UNKNOWN".to_string();
    };

    value
        .pointer("/error/details")
        .and_then(|details| details.as_array())
        .and_then(|details| {
            details
                .iter()
                .find_map(|d| d.get("errorCode").and_then(|c| c.as_str()))
        })
        .or_else(|| value.pointer("/error/status").and_then(|s| s.as_str()))
        .unwrap_or("UNKNOWN")
        .to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::token_manager::tests::test_service_account;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> MessagingClient {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "test-token",
                "expires_in": 3600
            })))
            .mount(server)
            .await;

        let manager = TokenManager::new(
            test_service_account(format!("{}/token", server.uri())),
            Client::new(),
        )
        .unwrap();
        MessagingClient::with_base_url(Arc::new(manager), Client::new(), server.uri())
    }

    #[tokio::test]
    async fn test_send_to_token() {
        let server = MockServer::start().await;
        let client = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/projects/forumus-test/messages:send"))
            .and(body_partial_json(serde_json::json!({
                "message": {
                    "token": "device-1",
                    "notification": {"title": "New Comment", "body": "hello"},
                    "android": {"priority": "HIGH"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/forumus-test/messages/0:12345"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let name = client
            .send_to_token("device-1", "New Comment", "hello", HashMap::new())
            .await
            .unwrap();
        assert_eq!(name, "projects/forumus-test/messages/0:12345");
    }

    #[tokio::test]
    async fn test_unregistered_token_reported() {
        let server = MockServer::start().await;
        let client = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/projects/forumus-test/messages:send"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {
                    "code": 404,
                    "status": "NOT_FOUND",
                    "details": [{"errorCode": "UNREGISTERED"}]
                }
            })))
            .mount(&server)
            .await;

        let err = client
            .send_to_token("stale-token", "t", "b", HashMap::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no longer valid"));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 100), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(120);
        let truncated = truncate(&long, 100);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_extract_error_code_from_details() {
        let body = r#"{"error": {"details": [{"errorCode": "UNREGISTERED"}]}}"#;
        assert_eq!(extract_fcm_error_code(body), "UNREGISTERED");
    }

    #[test]
    fn test_extract_error_code_falls_back_to_status() {
        let body = r#"{"error": {"status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(extract_fcm_error_code(body), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_extract_error_code_unknown_on_garbage() {
        assert_eq!(extract_fcm_error_code("<html></html>"), "UNKNOWN");
    }
}
