//! Notification trigger business logic

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::firebase::firestore::FsValue;
use crate::firebase::{FirestoreClient, MessagingClient};

use super::types::NotificationTriggerRequest;

/// Preview snippets longer than this are truncated in the push body
const PREVIEW_MAX_CHARS: usize = 50;

/// Notification service
///
/// Persists a notification record under the target user's document and
/// pushes it via FCM when the user has a registration token on file.
pub struct NotificationService {
    firestore: Arc<FirestoreClient>,
    messaging: Arc<MessagingClient>,
}

impl NotificationService {
    pub fn new(firestore: Arc<FirestoreClient>, messaging: Arc<MessagingClient>) -> Self {
        Self {
            firestore,
            messaging,
        }
    }

    /// Trigger a notification for the target user
    ///
    /// Self-actions succeed without side effects. A push delivery failure
    /// is logged but does not fail the trigger; the persisted record is the
    /// source of truth for the in-app notification list.
    pub async fn trigger(&self, request: &NotificationTriggerRequest) -> anyhow::Result<()> {
        let Some(target_user_id) = request.target_user_id.as_deref().filter(|v| !v.is_empty())
        else {
            bail!("targetUserId is required");
        };

        if request.actor_id.as_deref() == Some(target_user_id) {
            tracing::info!(target_user_id, "Skipping notification: actor is target user");
            return Ok(());
        }

        let target_user = self.firestore.get_user(target_user_id).await?;

        let notification_id = Uuid::new_v4().to_string();
        let fields = notification_fields(&notification_id, request);
        self.firestore
            .create_document(
                &format!("users/{}", target_user_id),
                "notifications",
                &notification_id,
                fields,
            )
            .await?;
        tracing::info!(%notification_id, target_user_id, "Notification record saved");

        match target_user.fcm_token.as_deref().filter(|t| !t.is_empty()) {
            Some(fcm_token) => {
                let kind = request.kind.as_deref().unwrap_or("");
                let title = notification_title(kind);
                let body = notification_body(
                    kind,
                    request.actor_name.as_deref(),
                    request.preview_text.as_deref(),
                );

                let mut data = HashMap::new();
                data.insert("type".to_string(), "general_notification".to_string());
                data.insert("notificationId".to_string(), notification_id.clone());
                data.insert(
                    "targetId".to_string(),
                    request.target_id.clone().unwrap_or_default(),
                );
                data.insert(
                    "click_action".to_string(),
                    "FLUTTER_NOTIFICATION_CLICK".to_string(),
                );

                if let Err(e) = self
                    .messaging
                    .send_to_token(fcm_token, title, &body, data)
                    .await
                {
                    tracing::error!(target_user_id, error = %e, "Push delivery failed");
                }
            }
            None => {
                tracing::info!(target_user_id, "Target user has no FCM token, skipping push");
            }
        }

        Ok(())
    }
}

fn notification_fields(
    notification_id: &str,
    request: &NotificationTriggerRequest,
) -> HashMap<String, FsValue> {
    let mut fields = HashMap::new();
    fields.insert("id".to_string(), FsValue::string(notification_id));
    fields.insert(
        "type".to_string(),
        FsValue::string(request.kind.clone().unwrap_or_default()),
    );
    fields.insert(
        "actorId".to_string(),
        FsValue::string(request.actor_id.clone().unwrap_or_default()),
    );
    fields.insert(
        "actorName".to_string(),
        FsValue::string(request.actor_name.clone().unwrap_or_default()),
    );
    fields.insert(
        "targetId".to_string(),
        FsValue::string(request.target_id.clone().unwrap_or_default()),
    );
    fields.insert(
        "previewText".to_string(),
        FsValue::string(request.preview_text.clone().unwrap_or_default()),
    );
    fields.insert(
        "createdAt".to_string(),
        FsValue::timestamp(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
    );
    fields.insert("isRead".to_string(), FsValue::boolean(false));
    fields
}

fn notification_title(kind: &str) -> &'static str {
    match kind {
        "UPVOTE" => "New Upvote",
        "COMMENT" => "New Comment",
        "REPLY" => "New Reply",
        _ => "New Notification",
    }
}

fn notification_body(kind: &str, actor_name: Option<&str>, preview_text: Option<&str>) -> String {
    let actor = actor_name.unwrap_or("Someone");
    let mut preview = preview_text.unwrap_or("").to_string();
    if preview.chars().count() > PREVIEW_MAX_CHARS {
        preview = preview.chars().take(PREVIEW_MAX_CHARS).collect::<String>() + "...";
    }

    match kind {
        "UPVOTE" => format!("{} upvoted your post: {}", actor, preview),
        "COMMENT" => format!("{} commented on your post: {}", actor, preview),
        "REPLY" => format!("{} replied to your comment: {}", actor, preview),
        _ => format!("{} interacted with your content.", actor),
    }
}
