//! Admin action gateway
//!
//! The credential-gated administrative surface: a single operation that
//! resets a user's password in the identity provider, authorized by the
//! shared admin secret carried in the request body.
//!
//! # Usage
//! ```ignore
//! let state = GatewayState::new(admin_secret_key, auth_client);
//! let router = create_gateway_router(state);
//! ```

mod handlers;
mod router;
pub mod types;

pub use handlers::GatewayState;
pub use router::create_gateway_router;
