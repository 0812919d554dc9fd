//! Gateway routing configuration

use axum::{Router, routing::post};

use super::handlers::{GatewayState, reset_password};

/// Create the gateway router
///
/// # Endpoints
/// - `POST /resetPassword` - Reset a user's password in the identity provider
///
/// # Authentication
/// The shared admin secret is carried in the JSON body (`secretKey`) and
/// checked by the handler itself, so no auth middleware is layered here.
pub fn create_gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/resetPassword", post(reset_password))
        .with_state(state)
}
