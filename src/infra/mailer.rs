//! Change-alert mail notifier.
//!
//! Sends a plaintext email when a contact changes. Without an SMTP host the
//! message is logged instead of sent, so development setups can enable
//! alerts without a relay.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::config::{MailSettings, MAIL_SUBJECT_CONTACT_CHANGED};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Optional port invoked by services after a contact changes.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MailNotifier: Send + Sync {
    /// Alert the configured recipient that a contact changed
    async fn contact_changed(&self, contact_id: Uuid) -> AppResult<()>;
}

/// Plaintext email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// Change alert for a contact, addressed per the mail settings
    pub fn contact_changed(settings: &MailSettings, contact_id: Uuid) -> Self {
        Self {
            from: settings.from.clone(),
            to: settings.to.clone(),
            subject: MAIL_SUBJECT_CONTACT_CHANGED.to_string(),
            body: format!(
                "Contact {} was changed.\n\nOpen the contact list to review the update.",
                contact_id
            ),
        }
    }

    fn into_message(self) -> AppResult<Message> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid sender address: {}", e)))?;
        let to: Mailbox = self
            .to
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(self.body)
            .map_err(|e| AppError::internal(format!("Failed to build email: {}", e)))
    }
}

/// Build the mail notifier for the given settings.
///
/// Returns `None` when alerts are disabled, in which case services never
/// invoke the port.
pub fn mail_notifier(settings: &MailSettings) -> Option<Arc<dyn MailNotifier>> {
    if !settings.enabled {
        return None;
    }

    if settings.is_configured() {
        Some(Arc::new(SmtpMailer::new(settings.clone())))
    } else {
        tracing::warn!("SMTP not configured - change alerts will be logged instead of sent");
        Some(Arc::new(LogMailer::new(settings.clone())))
    }
}

/// SMTP implementation: one connection per message.
pub struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    fn transport(&self) -> AppResult<AsyncSmtpTransport<Tokio1Executor>> {
        let host = self
            .settings
            .smtp_host
            .clone()
            .ok_or_else(|| AppError::internal("SMTP host is not configured"))?;

        let tls = if self.settings.smtp_tls {
            let params = TlsParameters::builder(host.clone())
                .dangerous_accept_invalid_certs(self.settings.accept_invalid_certs)
                .build()
                .map_err(|e| AppError::internal(format!("Invalid TLS parameters: {}", e)))?;
            Tls::Required(params)
        } else {
            Tls::None
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.settings.smtp_port)
            .tls(tls);

        if let Some((user, pass)) = self.settings.credentials() {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl MailNotifier for SmtpMailer {
    async fn contact_changed(&self, contact_id: Uuid) -> AppResult<()> {
        let email = EmailMessage::contact_changed(&self.settings, contact_id);
        tracing::info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            "Sending change alert"
        );

        let message = email.into_message()?;
        // Dropping the transport closes the connection
        let transport = self.transport()?;
        transport
            .send(message)
            .await
            .map_err(|e| AppError::internal(format!("SMTP send failed: {}", e)))?;

        tracing::info!(%contact_id, "Change alert sent");
        Ok(())
    }
}

/// Development implementation: logs the message instead of sending it.
pub struct LogMailer {
    settings: MailSettings,
}

impl LogMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl MailNotifier for LogMailer {
    async fn contact_changed(&self, contact_id: Uuid) -> AppResult<()> {
        let email = EmailMessage::contact_changed(&self.settings, contact_id);
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            email.from,
            email.to,
            email.subject,
            email.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_settings_produce_no_notifier() {
        assert!(mail_notifier(&MailSettings::default()).is_none());
    }

    #[test]
    fn enabled_settings_produce_a_notifier() {
        let settings = MailSettings {
            enabled: true,
            ..MailSettings::default()
        };
        assert!(mail_notifier(&settings).is_some());

        let settings = MailSettings {
            enabled: true,
            smtp_host: Some("smtp.example.com".to_string()),
            ..MailSettings::default()
        };
        assert!(mail_notifier(&settings).is_some());
    }

    #[test]
    fn alert_body_names_the_contact() {
        let id = Uuid::new_v4();
        let email = EmailMessage::contact_changed(&MailSettings::default(), id);

        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.to, "admin@example.com");
        assert_eq!(email.subject, MAIL_SUBJECT_CONTACT_CHANGED);
        assert!(email.body.contains(&id.to_string()));
        assert!(email.into_message().is_ok());
    }

    #[test]
    fn invalid_sender_is_rejected() {
        let settings = MailSettings {
            from: "not an address".to_string(),
            ..MailSettings::default()
        };
        let email = EmailMessage::contact_changed(&settings, Uuid::new_v4());
        assert!(matches!(email.into_message(), Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        let mailer = LogMailer::new(MailSettings::default());
        assert!(mailer.contact_changed(Uuid::new_v4()).await.is_ok());
    }
}
