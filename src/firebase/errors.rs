//! Identity Toolkit error enhancement
//!
//! The Identity Toolkit API reports failures as terse uppercase codes
//! ("EMAIL_NOT_FOUND", "WEAK_PASSWORD : ..."). This module turns them into
//! messages fit for an API response while keeping the original for logs.

use serde_json::Value;

/// Structured information about an Identity Toolkit error
#[derive(Debug, Clone)]
pub struct AuthErrorInfo {
    /// Error code from the Identity Toolkit API
    pub code: String,
    /// Enhanced, user-friendly message
    pub user_message: String,
    /// Original message from the API (for logging)
    pub original_message: String,
}

/// Enhance an Identity Toolkit error body
///
/// # Arguments
/// * `error_json` - Parsed error response body
///                  Expected format: {"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}
pub fn enhance_auth_error(error_json: &Value) -> AuthErrorInfo {
    let original_message = error_json
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string();

    // Identity Toolkit sometimes appends detail after " : "
    // (e.g. "WEAK_PASSWORD : Password should be at least 6 characters")
    let (code, detail) = match original_message.split_once(" : ") {
        Some((code, detail)) => (code.trim().to_string(), Some(detail.trim())),
        None => (original_message.clone(), None),
    };

    let user_message = match code.as_str() {
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => {
            "There is no user record corresponding to the provided identifier.".to_string()
        }
        "INVALID_EMAIL" => "The email address is improperly formatted.".to_string(),
        "WEAK_PASSWORD" => match detail {
            Some(detail) => format!("The password is too weak: {}", detail),
            None => "The password must be a string with at least 6 characters.".to_string(),
        },
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many requests. Please wait a moment before retrying.".to_string()
        }
        "PERMISSION_DENIED" | "INSUFFICIENT_PERMISSION" => {
            "The service account is missing permissions for this operation.".to_string()
        }
        "Unknown error" => original_message.clone(),
        _ => match detail {
            Some(detail) => format!("{} ({})", detail, code),
            None => original_message.clone(),
        },
    };

    AuthErrorInfo {
        code,
        user_message,
        original_message,
    }
}

/// Enhance a raw (possibly non-JSON) error body
///
/// Falls back to the body text when it does not parse as the Google error
/// envelope.
pub fn enhance_auth_error_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => {
            let info = enhance_auth_error(&json);
            tracing::debug!(
                code = %info.code,
                original_message = %info.original_message,
                "Identity Toolkit error enhanced"
            );
            info.user_message
        }
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_not_found_enhanced() {
        let error_json = json!({"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}});

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.code, "EMAIL_NOT_FOUND");
        assert_eq!(
            info.user_message,
            "There is no user record corresponding to the provided identifier."
        );
        assert_eq!(info.original_message, "EMAIL_NOT_FOUND");
    }

    #[test]
    fn test_weak_password_with_detail() {
        let error_json = json!({
            "error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}
        });

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.code, "WEAK_PASSWORD");
        assert!(info.user_message.contains("too weak"));
        assert!(info.user_message.contains("at least 6 characters"));
    }

    #[test]
    fn test_invalid_email_enhanced() {
        let error_json = json!({"error": {"message": "INVALID_EMAIL"}});

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.user_message, "The email address is improperly formatted.");
    }

    #[test]
    fn test_too_many_attempts_enhanced() {
        let error_json = json!({"error": {"message": "TOO_MANY_ATTEMPTS_TRY_LATER"}});

        let info = enhance_auth_error(&error_json);

        assert!(info.user_message.contains("Too many requests"));
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let error_json = json!({"error": {"message": "SOME_FUTURE_ERROR"}});

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.code, "SOME_FUTURE_ERROR");
        assert_eq!(info.user_message, "SOME_FUTURE_ERROR");
    }

    #[test]
    fn test_unknown_code_with_detail() {
        let error_json = json!({"error": {"message": "SOME_FUTURE_ERROR : extra context"}});

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.user_message, "extra context (SOME_FUTURE_ERROR)");
    }

    #[test]
    fn test_empty_envelope_uses_defaults() {
        let error_json = json!({});

        let info = enhance_auth_error(&error_json);

        assert_eq!(info.code, "Unknown error");
        assert_eq!(info.user_message, "Unknown error");
    }

    #[test]
    fn test_non_json_body_falls_back_to_text() {
        assert_eq!(enhance_auth_error_body("<html>502</html>"), "<html>502</html>");
    }

    #[test]
    fn test_json_body_enhanced() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}"#;
        assert_eq!(
            enhance_auth_error_body(body),
            "There is no user record corresponding to the provided identifier."
        );
    }
}
