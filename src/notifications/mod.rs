//! User notifications
//!
//! The trigger endpoint forum services call after an upvote, comment or
//! reply: persists a notification record for the target user and pushes it
//! to their device when a registration token is on file.

mod handlers;
mod router;
mod service;
pub mod types;

pub use handlers::NotificationState;
pub use router::create_notifications_router;
pub use service::NotificationService;
