//! Notification API handler functions

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use super::service::NotificationService;
use super::types::NotificationTriggerRequest;

/// Notification API shared state
#[derive(Clone)]
pub struct NotificationState {
    pub service: Arc<NotificationService>,
}

impl NotificationState {
    pub fn new(service: NotificationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// POST /notifications
///
/// The response contract is a flat status string; callers only branch on
/// the status code. Failure detail stays in the logs.
pub async fn trigger_notification(
    State(state): State<NotificationState>,
    Json(request): Json<NotificationTriggerRequest>,
) -> (StatusCode, &'static str) {
    match state.service.trigger(&request).await {
        Ok(()) => (StatusCode::OK, "Notification triggered successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Error triggering notification");
            (StatusCode::BAD_REQUEST, "Failed to trigger notification")
        }
    }
}
