use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Forumus admin gateway configuration
///
/// Loaded from a JSON file, then overlaid with environment variables
/// (`ADMIN_SECRET_KEY`, `PORT`, `SERVICE_ACCOUNT_PATH`) so deployments can
/// keep the secret out of the config file entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared admin secret gating the password reset endpoint
    #[serde(default)]
    pub admin_secret_key: Option<String>,

    /// Service account key file path
    #[serde(default)]
    pub service_account_path: Option<String>,

    /// Request timeout for provider calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout for provider calls, in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// HTTP proxy URL (optional)
    /// Supported formats: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Proxy authentication username (optional)
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// Proxy authentication password (optional)
    #[serde(default)]
    pub proxy_password: Option<String>,

    /// Identity Toolkit base URL override (tests / Auth emulator)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_toolkit_url: Option<String>,

    /// FCM base URL override (tests)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_url: Option<String>,

    /// Firestore base URL override (tests / emulator)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firestore_url: Option<String>,

    /// Email delivery settings (optional, email API disabled when absent)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,
}

/// Email delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    #[serde(flatten)]
    pub transport: EmailTransportConfig,

    /// Sender email address
    pub from_email: String,

    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

/// Email transport, either a real SMTP relay or a directory of .eml files
/// for development
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailTransportConfig {
    Smtp {
        host: String,
        port: u16,
        username: String,
        password: String,
        #[serde(default = "default_use_tls")]
        use_tls: bool,
    },
    File {
        path: String,
    },
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_from_name() -> String {
    "Forumus".to_string()
}

fn default_use_tls() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            admin_secret_key: None,
            service_account_path: None,
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
            identity_toolkit_url: None,
            messaging_url: None,
            firestore_url: None,
            email: None,
        }
    }
}

impl Config {
    /// Get default config file path
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// Load configuration from file and apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            // Config file doesn't exist, start from defaults
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment variables take precedence over file values
    fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("ADMIN_SECRET_KEY") {
            if !secret.is_empty() {
                self.admin_secret_key = Some(secret);
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring non-numeric PORT value: {}", port),
            }
        }
        if let Ok(path) = std::env::var("SERVICE_ACCOUNT_PATH") {
            if !path.is_empty() {
                self.service_account_path = Some(path);
            }
        }
    }

    /// Effective service account key path
    pub fn service_account_path(&self) -> &str {
        self.service_account_path
            .as_deref()
            .unwrap_or("service_account.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.admin_secret_key.is_none());
        assert_eq!(config.service_account_path(), "service_account.json");
    }

    #[test]
    fn test_parse_minimal() {
        let config: Config = serde_json::from_str(r#"{"adminSecretKey": "S"}"#).unwrap();
        assert_eq!(config.admin_secret_key.as_deref(), Some("S"));
        assert_eq!(config.port, 3000);
        assert!(config.email.is_none());
    }

    #[test]
    fn test_parse_smtp_email_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "email": {
                    "type": "smtp",
                    "host": "smtp.example.com",
                    "port": 587,
                    "username": "forumus",
                    "password": "hunter2",
                    "fromEmail": "noreply@forumus.app"
                }
            }"#,
        )
        .unwrap();

        let email = config.email.expect("email config");
        assert_eq!(email.from_email, "noreply@forumus.app");
        assert_eq!(email.from_name, "Forumus");
        match email.transport {
            EmailTransportConfig::Smtp { host, port, use_tls, .. } => {
                assert_eq!(host, "smtp.example.com");
                assert_eq!(port, 587);
                assert!(use_tls);
            }
            EmailTransportConfig::File { .. } => panic!("expected smtp transport"),
        }
    }

    #[test]
    fn test_parse_file_email_config() {
        let config: Config = serde_json::from_str(
            r#"{"email": {"type": "file", "path": "./emails", "fromEmail": "noreply@forumus.app"}}"#,
        )
        .unwrap();

        match config.email.unwrap().transport {
            EmailTransportConfig::File { path } => assert_eq!(path, "./emails"),
            EmailTransportConfig::Smtp { .. } => panic!("expected file transport"),
        }
    }
}
