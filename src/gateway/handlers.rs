//! Gateway handler functions

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::common::auth;
use crate::firebase::FirebaseAuthClient;

use super::types::{GatewayErrorResponse, ResetPasswordRequest, ResetSuccessResponse};

/// Gateway shared state
#[derive(Clone)]
pub struct GatewayState {
    /// Shared admin secret
    pub admin_secret_key: String,
    /// Identity provider client
    pub auth_client: Arc<FirebaseAuthClient>,
}

impl GatewayState {
    pub fn new(admin_secret_key: impl Into<String>, auth_client: Arc<FirebaseAuthClient>) -> Self {
        Self {
            admin_secret_key: admin_secret_key.into(),
            auth_client,
        }
    }
}

/// POST /api/resetPassword
///
/// Validation order is fixed: secret first, then field presence, then the
/// provider calls. The provider is never contacted for a request that fails
/// either local check.
pub async fn reset_password(
    State(state): State<GatewayState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Response {
    let supplied_key = request.secret_key.as_deref().unwrap_or("");
    if !auth::constant_time_eq(supplied_key, &state.admin_secret_key) {
        tracing::warn!("Password reset rejected: admin secret mismatch");
        return (
            StatusCode::FORBIDDEN,
            Json(GatewayErrorResponse::unauthorized()),
        )
            .into_response();
    }

    let email = request.email.as_deref().filter(|v| !v.is_empty());
    let new_password = request.new_password.as_deref().filter(|v| !v.is_empty());
    let (Some(email), Some(new_password)) = (email, new_password) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(GatewayErrorResponse::missing_fields()),
        )
            .into_response();
    };

    match reset(&state.auth_client, email, new_password).await {
        Ok(()) => {
            tracing::info!(email, "Password reset completed");
            (StatusCode::OK, Json(ResetSuccessResponse::password_updated())).into_response()
        }
        Err(e) => {
            tracing::error!(email, error = %e, "Password reset failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GatewayErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Resolve the account by email, then replace its password
async fn reset(
    auth_client: &FirebaseAuthClient,
    email: &str,
    new_password: &str,
) -> anyhow::Result<()> {
    let user = auth_client.get_user_by_email(email).await?;
    auth_client
        .update_user_password(&user.local_id, new_password)
        .await
}
