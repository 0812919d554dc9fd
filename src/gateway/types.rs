//! Gateway wire types

use serde::{Deserialize, Serialize};

/// Password reset request body
///
/// Every field is optional at the wire level; presence is validated in the
/// handler so missing fields map to the documented responses instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub new_password: Option<String>,
}

/// Success response
#[derive(Debug, Serialize)]
pub struct ResetSuccessResponse {
    pub success: bool,
    pub message: String,
}

impl ResetSuccessResponse {
    pub fn password_updated() -> Self {
        Self {
            success: true,
            message: "Password updated".to_string(),
        }
    }
}

/// Error response, a flat `{"error": ...}` object
#[derive(Debug, Serialize)]
pub struct GatewayErrorResponse {
    pub error: String,
}

impl GatewayErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn missing_fields() -> Self {
        Self::new("Missing email or newPassword")
    }
}
