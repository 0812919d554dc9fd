//! Email API type definitions

use serde::{Deserialize, Serialize};

/// Moderation standing of a user account, drives the report email styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Normal,
    Reminded,
    Warned,
    Banned,
}

impl UserStatus {
    /// Parse a status value, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "NORMAL" => Some(Self::Normal),
            "REMINDED" => Some(Self::Reminded),
            "WARNED" => Some(Self::Warned),
            "BANNED" => Some(Self::Banned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Reminded => "REMINDED",
            Self::Warned => "WARNED",
            Self::Banned => "BANNED",
        }
    }
}

/// OTP email request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[serde(default)]
    pub recipient_email: Option<String>,

    #[serde(default)]
    pub otp_code: Option<String>,
}

/// Welcome email request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendWelcomeRequest {
    #[serde(default)]
    pub recipient_email: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,
}

/// Account status report email request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReportRequest {
    #[serde(default)]
    pub recipient_email: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_status: Option<String>,

    #[serde(default)]
    pub reported_posts: Vec<ReportedPost>,
}

/// A post entry listed in the report email
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedPost {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

/// Email API response
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
