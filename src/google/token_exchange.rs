use serde::{Deserialize, Serialize};

/// JWT-bearer grant type (RFC 7523)
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claims of the signed assertion presented to the token endpoint
#[derive(Debug, Serialize)]
pub struct AssertionClaims {
    /// Issuer, the service account email
    pub iss: String,
    /// Space-separated OAuth2 scopes
    pub scope: String,
    /// Audience, the token endpoint URL
    pub aud: String,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expiration, Unix seconds (at most one hour after iat)
    pub exp: i64,
}

/// Token endpoint response body
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    // #[serde(default)]
    // pub token_type: Option<String>,
}
