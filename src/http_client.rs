//! HTTP client construction
//!
//! All outbound calls to Google APIs share one client configuration:
//! rustls, explicit connect/request timeouts, optional egress proxy.

use reqwest::{Client, Proxy};
use std::time::Duration;

/// Egress proxy configuration
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Proxy URL, supports http/https/socks5
    pub url: String,
    /// Proxy authentication username
    pub username: Option<String>,
    /// Proxy authentication password
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Build the shared HTTP client
///
/// `timeout_secs` bounds the whole request; `connect_timeout_secs` bounds
/// connection establishment separately so a black-holed route fails fast.
pub fn build_client(
    proxy: Option<&ProxyConfig>,
    timeout_secs: u64,
    connect_timeout_secs: u64,
) -> anyhow::Result<Client> {
    let mut builder = Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs));

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(&proxy_config.url)?;

        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password) {
            proxy = proxy.basic_auth(username, password);
        }

        builder = builder.proxy(proxy);
        tracing::debug!("HTTP client using proxy: {}", proxy_config.url);
    }

    Ok(builder.build()?)
}
