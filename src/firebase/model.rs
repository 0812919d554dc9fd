//! Identity Toolkit wire types

use serde::{Deserialize, Serialize};

/// Account record as returned by accounts:lookup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Provider-assigned user id (uid)
    pub local_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub email_verified: bool,

    #[serde(default)]
    pub disabled: bool,
}

/// accounts:lookup request body
#[derive(Debug, Serialize)]
pub struct LookupRequest {
    pub email: Vec<String>,
}

/// accounts:lookup response body
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// accounts:update request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub local_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// accounts:update response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountResponse {
    pub local_id: String,
}
