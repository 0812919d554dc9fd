//! Firebase REST clients
//!
//! Thin typed clients over the three Google APIs backing the gateway:
//! Identity Toolkit (user accounts), FCM (push delivery) and Firestore
//! (user directory + notification records). All three authorize through
//! the shared [`TokenManager`](crate::google::TokenManager).

pub mod auth_client;
pub mod errors;
pub mod firestore;
pub mod messaging;
pub mod model;

pub use auth_client::FirebaseAuthClient;
pub use firestore::FirestoreClient;
pub use messaging::MessagingClient;
