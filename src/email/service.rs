//! Email delivery service

use std::path::Path;

use anyhow::Context;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncFileTransport, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::model::config::{EmailConfig, EmailTransportConfig};

use super::templates;
use super::types::{ReportedPost, UserStatus};

/// Email delivery service
pub struct EmailService {
    transport: EmailTransport,
    from: Mailbox,
}

enum EmailTransport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    File(AsyncFileTransport<Tokio1Executor>),
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let transport = match &config.transport {
            EmailTransportConfig::Smtp {
                host,
                port,
                username,
                password,
                use_tls,
            } => {
                if !use_tls {
                    tracing::warn!("SMTP TLS is disabled, not recommended for production");
                }

                let builder = if *use_tls {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                        .context("Failed to create SMTP transport")?
                } else {
                    AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                };

                EmailTransport::Smtp(
                    builder
                        .port(*port)
                        .credentials(Credentials::new(username.clone(), password.clone()))
                        .build(),
                )
            }
            EmailTransportConfig::File { path } => {
                let emails_dir = Path::new(path);
                if !emails_dir.exists() {
                    std::fs::create_dir_all(emails_dir)
                        .with_context(|| format!("Failed to create emails directory: {}", path))?;
                }
                tracing::info!(%path, "Email file transport enabled");
                EmailTransport::File(AsyncFileTransport::new(emails_dir))
            }
        };

        let from = format!("{} <{}>", config.from_name, config.from_email)
            .parse::<Mailbox>()
            .context("Invalid fromEmail/fromName configuration")?;

        Ok(Self { transport, from })
    }

    /// Send the verification code email
    pub async fn send_otp_email(&self, recipient_email: &str, otp_code: &str) -> anyhow::Result<()> {
        self.send(
            recipient_email,
            "Your Forumus Verification Code",
            templates::otp_text(otp_code),
            templates::otp_html(recipient_email, otp_code),
        )
        .await
    }

    /// Send the post-verification welcome email
    pub async fn send_welcome_email(
        &self,
        recipient_email: &str,
        user_name: &str,
    ) -> anyhow::Result<()> {
        self.send(
            recipient_email,
            "Welcome to Forumus!",
            templates::welcome_text(user_name),
            templates::welcome_html(user_name),
        )
        .await
    }

    /// Send the account status report email
    pub async fn send_report_email(
        &self,
        recipient_email: &str,
        user_name: &str,
        user_status: UserStatus,
        reported_posts: &[ReportedPost],
    ) -> anyhow::Result<()> {
        self.send(
            recipient_email,
            "Forumus Account Status Update",
            templates::report_text(user_name, user_status),
            templates::report_html(user_name, user_status, reported_posts),
        )
        .await
    }

    async fn send(
        &self,
        recipient_email: &str,
        subject: &str,
        text_body: String,
        html_body: String,
    ) -> anyhow::Result<()> {
        // Mailbox parsing doubles as recipient address validation
        let to = recipient_email
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient email: {}", recipient_email))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text_body, html_body))
            .context("Failed to build email message")?;

        match &self.transport {
            EmailTransport::Smtp(transport) => {
                transport
                    .send(message)
                    .await
                    .context("SMTP delivery failed")?;
            }
            EmailTransport::File(transport) => {
                transport
                    .send(message)
                    .await
                    .context("File delivery failed")?;
            }
        }

        tracing::info!(recipient = recipient_email, subject, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_service(dir: &Path) -> EmailService {
        EmailService::new(&EmailConfig {
            transport: EmailTransportConfig::File {
                path: dir.to_str().unwrap().to_string(),
            },
            from_email: "noreply@forumus.app".to_string(),
            from_name: "Forumus".to_string(),
        })
        .unwrap()
    }

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("forumus-email-{}-{}", tag, uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_otp_email_written_to_file_transport() {
        let dir = temp_dir("otp");
        let service = file_service(&dir);

        service.send_otp_email("a@b.com", "482913").await.unwrap();

        let delivered = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(delivered, 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_invalid_recipient_rejected_before_delivery() {
        let dir = temp_dir("invalid");
        let service = file_service(&dir);

        let err = service
            .send_otp_email("not an address", "482913")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid recipient email"));

        let delivered = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(delivered, 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_report_email_delivers_with_posts() {
        let dir = temp_dir("report");
        let service = file_service(&dir);

        let posts = vec![ReportedPost {
            title: Some("Spam thread".to_string()),
            reason: Some("Spam".to_string()),
            date: Some("2026-07-01".to_string()),
        }];
        service
            .send_report_email("a@b.com", "Bob", UserStatus::Warned, &posts)
            .await
            .unwrap();

        let delivered = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(delivered, 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rejects_invalid_from_address() {
        let result = EmailService::new(&EmailConfig {
            transport: EmailTransportConfig::File {
                path: std::env::temp_dir().to_str().unwrap().to_string(),
            },
            from_email: "not an address".to_string(),
            from_name: "Forumus".to_string(),
        });
        assert!(result.is_err());
    }
}
