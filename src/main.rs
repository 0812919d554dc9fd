mod common;
mod email;
mod firebase;
mod gateway;
mod google;
mod http_client;
mod model;
mod notifications;

use std::sync::Arc;

use clap::Parser;
use google::{ServiceAccount, TokenManager};
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration (file + environment overrides)
    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    // Admin secret is mandatory; an empty value would turn the secret check
    // into a pass-through
    let admin_secret_key = match config.admin_secret_key.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => secret.to_string(),
        _ => {
            tracing::error!("adminSecretKey not set (config file or ADMIN_SECRET_KEY)");
            std::process::exit(1);
        }
    };

    // Load the service account key file (fail fast on a bad credential)
    let service_account_path = args
        .service_account
        .unwrap_or_else(|| config.service_account_path().to_string());
    let service_account = ServiceAccount::load(&service_account_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load service account: {:#}", e);
        std::process::exit(1);
    });
    tracing::info!(
        project_id = %service_account.project_id,
        client_email = %service_account.client_email,
        "Service account loaded"
    );

    // Build proxy configuration
    let proxy_config = config.proxy_url.as_ref().map(|url| {
        let mut proxy = http_client::ProxyConfig::new(url);
        if let (Some(username), Some(password)) = (&config.proxy_username, &config.proxy_password) {
            proxy = proxy.with_auth(username, password);
        }
        proxy
    });

    if proxy_config.is_some() {
        tracing::info!("HTTP proxy configured: {}", config.proxy_url.as_ref().unwrap());
    }

    // One shared HTTP client for every provider call
    let client = http_client::build_client(
        proxy_config.as_ref(),
        config.request_timeout_secs,
        config.connect_timeout_secs,
    )
    .unwrap_or_else(|e| {
        tracing::error!("Failed to create HTTP client: {}", e);
        std::process::exit(1);
    });

    // Token manager (parses the private key, another fail-fast point)
    let token_manager = TokenManager::new(service_account, client.clone()).unwrap_or_else(|e| {
        tracing::error!("Failed to create token manager: {:#}", e);
        std::process::exit(1);
    });
    let token_manager = Arc::new(token_manager);

    // Provider clients
    let auth_client = match &config.identity_toolkit_url {
        Some(url) => firebase::FirebaseAuthClient::with_base_url(
            token_manager.clone(),
            client.clone(),
            url,
        ),
        None => firebase::FirebaseAuthClient::new(token_manager.clone(), client.clone()),
    };
    let firestore = match &config.firestore_url {
        Some(url) => {
            firebase::FirestoreClient::with_base_url(token_manager.clone(), client.clone(), url)
        }
        None => firebase::FirestoreClient::new(token_manager.clone(), client.clone()),
    };
    let messaging = match &config.messaging_url {
        Some(url) => {
            firebase::MessagingClient::with_base_url(token_manager.clone(), client.clone(), url)
        }
        None => firebase::MessagingClient::new(token_manager.clone(), client.clone()),
    };

    // Build the API routers
    let gateway_state = gateway::GatewayState::new(admin_secret_key, Arc::new(auth_client));
    let notification_service =
        notifications::NotificationService::new(Arc::new(firestore), Arc::new(messaging));
    let notification_state = notifications::NotificationState::new(notification_service);

    let api = gateway::create_gateway_router(gateway_state)
        .merge(notifications::create_notifications_router(notification_state));
    let mut app = axum::Router::new().nest("/api", api);

    // Email API only comes up when a transport is configured
    let email_enabled = config.email.is_some();
    if let Some(email_config) = &config.email {
        let email_service = email::EmailService::new(email_config).unwrap_or_else(|e| {
            tracing::error!("Failed to create email service: {:#}", e);
            std::process::exit(1);
        });
        app = app.nest(
            "/api/email",
            email::create_email_router(email::EmailState::new(email_service)),
        );
        tracing::info!("Email API enabled");
    } else {
        tracing::warn!("No email configuration, email API not enabled");
    }

    let app = app.layer(cors_layer());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting Forumus admin gateway: {}", addr);
    tracing::info!("Available APIs:");
    tracing::info!("  POST /api/resetPassword");
    tracing::info!("  POST /api/notifications");
    if email_enabled {
        tracing::info!("  POST /api/email/send-otp");
        tracing::info!("  POST /api/email/send-welcome");
        tracing::info!("  POST /api/email/send-report");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// CORS middleware layer
///
/// The admin surface is called from browser tooling on other origins, so
/// all origins, methods and headers are allowed. Authorization still
/// happens per request via the shared secret.
fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
