//! Notification API routing configuration

use axum::{Router, routing::post};

use super::handlers::{NotificationState, trigger_notification};

/// Create the notification API router
///
/// # Endpoints
/// - `POST /notifications` - Persist and push a user notification
pub fn create_notifications_router(state: NotificationState) -> Router {
    Router::new()
        .route("/notifications", post(trigger_notification))
        .with_state(state)
}
