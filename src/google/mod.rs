//! Google service account authentication
//!
//! Every provider call this service makes (Identity Toolkit, FCM,
//! Firestore) is authorized by a single service account. This module owns
//! the key file model and the OAuth2 access token lifecycle.

pub mod service_account;
pub mod token_exchange;
pub mod token_manager;

pub use service_account::ServiceAccount;
pub use token_manager::TokenManager;
