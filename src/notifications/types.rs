//! Notification API type definitions

use serde::Deserialize;

/// Notification trigger request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTriggerRequest {
    /// Event kind: UPVOTE, COMMENT or REPLY
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// User who performed the action
    #[serde(default)]
    pub actor_id: Option<String>,

    #[serde(default)]
    pub actor_name: Option<String>,

    /// Post or comment the action applies to
    #[serde(default)]
    pub target_id: Option<String>,

    /// User to notify
    #[serde(default)]
    pub target_user_id: Option<String>,

    /// Snippet of the post title or comment
    #[serde(default)]
    pub preview_text: Option<String>,
}
