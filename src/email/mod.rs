//! Transactional email
//!
//! Delivery of the three account emails the forum sends: verification OTP,
//! post-verification welcome, and account status reports. Bodies are HTML
//! with a plain-text alternative; transport is SMTP, or a directory of
//! files in development.

mod handlers;
mod router;
mod service;
mod templates;
pub mod types;

pub use handlers::EmailState;
pub use router::create_email_router;
pub use service::EmailService;
