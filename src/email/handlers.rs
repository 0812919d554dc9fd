//! Email API handler functions

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use super::service::EmailService;
use super::types::{
    EmailResponse, SendOtpRequest, SendReportRequest, SendWelcomeRequest, UserStatus,
};

/// Email API shared state
#[derive(Clone)]
pub struct EmailState {
    pub service: Arc<EmailService>,
}

impl EmailState {
    pub fn new(service: EmailService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

fn require<'a>(value: &'a Option<String>, error: &str) -> Result<&'a str, (StatusCode, Json<EmailResponse>)> {
    match value.as_deref().filter(|v| !v.is_empty()) {
        Some(value) => Ok(value),
        None => Err((
            StatusCode::BAD_REQUEST,
            Json(EmailResponse::error(error)),
        )),
    }
}

/// POST /send-otp
pub async fn send_otp(
    State(state): State<EmailState>,
    Json(request): Json<SendOtpRequest>,
) -> (StatusCode, Json<EmailResponse>) {
    let (recipient, otp_code) = match (
        require(&request.recipient_email, "Recipient email is required"),
        require(&request.otp_code, "OTP code is required"),
    ) {
        (Ok(recipient), Ok(otp_code)) => (recipient, otp_code),
        (Err(rejection), _) | (_, Err(rejection)) => return rejection,
    };

    match state.service.send_otp_email(recipient, otp_code).await {
        Ok(()) => (
            StatusCode::OK,
            Json(EmailResponse::success("OTP email sent successfully")),
        ),
        Err(e) => {
            tracing::error!(recipient, error = %e, "Failed to send OTP email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EmailResponse::error(format!("Failed to send OTP email: {}", e))),
            )
        }
    }
}

/// POST /send-welcome
pub async fn send_welcome(
    State(state): State<EmailState>,
    Json(request): Json<SendWelcomeRequest>,
) -> (StatusCode, Json<EmailResponse>) {
    let (recipient, user_name) = match (
        require(&request.recipient_email, "Recipient email is required"),
        require(&request.user_name, "User name is required"),
    ) {
        (Ok(recipient), Ok(user_name)) => (recipient, user_name),
        (Err(rejection), _) | (_, Err(rejection)) => return rejection,
    };

    match state.service.send_welcome_email(recipient, user_name).await {
        Ok(()) => (
            StatusCode::OK,
            Json(EmailResponse::success("Welcome email sent successfully")),
        ),
        Err(e) => {
            tracing::error!(recipient, error = %e, "Failed to send welcome email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EmailResponse::error(format!(
                    "Failed to send welcome email: {}",
                    e
                ))),
            )
        }
    }
}

/// POST /send-report
pub async fn send_report(
    State(state): State<EmailState>,
    Json(request): Json<SendReportRequest>,
) -> (StatusCode, Json<EmailResponse>) {
    let (recipient, user_name, status_value) = match (
        require(&request.recipient_email, "Recipient email is required"),
        require(&request.user_name, "User name is required"),
        require(&request.user_status, "User status is required"),
    ) {
        (Ok(recipient), Ok(user_name), Ok(status)) => (recipient, user_name, status),
        (Err(rejection), _, _) | (_, Err(rejection), _) | (_, _, Err(rejection)) => {
            return rejection;
        }
    };

    let Some(user_status) = UserStatus::parse(status_value) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(EmailResponse::error(format!(
                "Invalid user status: {}",
                status_value
            ))),
        );
    };

    match state
        .service
        .send_report_email(recipient, user_name, user_status, &request.reported_posts)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(EmailResponse::success("Report email sent successfully")),
        ),
        Err(e) => {
            tracing::error!(recipient, error = %e, "Failed to send report email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EmailResponse::error(format!(
                    "Failed to send report email: {}",
                    e
                ))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{EmailConfig, EmailTransportConfig};

    fn test_state(dir: &std::path::Path) -> EmailState {
        EmailState::new(
            EmailService::new(&EmailConfig {
                transport: EmailTransportConfig::File {
                    path: dir.to_str().unwrap().to_string(),
                },
                from_email: "noreply@forumus.app".to_string(),
                from_name: "Forumus".to_string(),
            })
            .unwrap(),
        )
    }

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir =
            std::env::temp_dir().join(format!("forumus-handler-{}-{}", tag, uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_send_otp_missing_recipient_is_400() {
        let dir = temp_dir("otp-missing");
        let state = test_state(&dir);

        let (status, Json(body)) = send_otp(
            State(state),
            Json(SendOtpRequest {
                recipient_email: None,
                otp_code: Some("482913".to_string()),
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Recipient email is required"));
        // Validation failed before the transport was touched
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_send_otp_delivers() {
        let dir = temp_dir("otp-ok");
        let state = test_state(&dir);

        let (status, Json(body)) = send_otp(
            State(state),
            Json(SendOtpRequest {
                recipient_email: Some("a@b.com".to_string()),
                otp_code: Some("482913".to_string()),
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_send_welcome_missing_name_is_400() {
        let dir = temp_dir("welcome-missing");
        let state = test_state(&dir);

        let (status, Json(body)) = send_welcome(
            State(state),
            Json(SendWelcomeRequest {
                recipient_email: Some("a@b.com".to_string()),
                user_name: Some(String::new()),
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("User name is required"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_send_report_invalid_status_is_400() {
        let dir = temp_dir("report-status");
        let state = test_state(&dir);

        let (status, Json(body)) = send_report(
            State(state),
            Json(SendReportRequest {
                recipient_email: Some("a@b.com".to_string()),
                user_name: Some("Bob".to_string()),
                user_status: Some("SUSPENDED".to_string()),
                reported_posts: vec![],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Invalid user status: SUSPENDED"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_send_report_delivers() {
        let dir = temp_dir("report-ok");
        let state = test_state(&dir);

        let (status, Json(body)) = send_report(
            State(state),
            Json(SendReportRequest {
                recipient_email: Some("a@b.com".to_string()),
                user_name: Some("Bob".to_string()),
                user_status: Some("warned".to_string()),
                reported_posts: vec![],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message.as_deref(), Some("Report email sent successfully"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
