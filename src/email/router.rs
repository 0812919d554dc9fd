//! Email API routing configuration

use axum::{Router, routing::post};

use super::handlers::{EmailState, send_otp, send_report, send_welcome};

/// Create the email API router
///
/// # Endpoints
/// - `POST /send-otp` - Send an OTP verification email
/// - `POST /send-welcome` - Send the welcome email after verification
/// - `POST /send-report` - Send an account status report email
pub fn create_email_router(state: EmailState) -> Router {
    Router::new()
        .route("/send-otp", post(send_otp))
        .route("/send-welcome", post(send_welcome))
        .route("/send-report", post(send_report))
        .with_state(state)
}
