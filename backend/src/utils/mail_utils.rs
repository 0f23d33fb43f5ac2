use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSendmailTransport, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use thiserror::Error;

use crate::config::site_config::{MailTransport, SiteConfig, SmtpSettings, SmtpTls};
use crate::models::contact_models::ValidContact;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// One contact email, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub from: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub to: Mailbox,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// The submitter always ends up in a reply header. With no configured
    /// sender they are also the `From`, which is an unverified claim.
    pub fn compose(config: &SiteConfig, contact: &ValidContact) -> Result<Self, DispatchError> {
        let to = config
            .recipient
            .parse::<Mailbox>()
            .map_err(|e| DispatchError::Build(format!("recipient: {}", e)))?;
        let submitter = Mailbox::new(None, contact.reply_to.clone());

        let (from, reply_to) = match &config.mail_from {
            Some(sender) => {
                let sender = sender
                    .parse::<Mailbox>()
                    .map_err(|e| DispatchError::Build(format!("sender: {}", e)))?;
                (sender, Some(submitter))
            }
            None => (submitter, None),
        };

        Ok(OutgoingMail {
            from,
            reply_to,
            to,
            subject: config.subject.clone(),
            body: contact.email_body(),
        })
    }

    pub fn into_message(self) -> Result<Message, DispatchError> {
        let mut builder = Message::builder()
            .from(self.from)
            .to(self.to)
            .subject(self.subject)
            .header(ContentType::TEXT_PLAIN);
        if let Some(reply_to) = self.reply_to {
            builder = builder.reply_to(reply_to);
        }
        builder
            .body(self.body)
            .map_err(|e| DispatchError::Build(e.to_string()))
    }
}

/// A single best-effort delivery attempt. No retries.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn dispatch(&self, mail: OutgoingMail) -> Result<(), DispatchError>;
}

pub struct SendmailMailer {
    transport: AsyncSendmailTransport<Tokio1Executor>,
}

impl SendmailMailer {
    pub fn new() -> Self {
        SendmailMailer {
            transport: AsyncSendmailTransport::<Tokio1Executor>::new(),
        }
    }
}

#[async_trait]
impl Mailer for SendmailMailer {
    async fn dispatch(&self, mail: OutgoingMail) -> Result<(), DispatchError> {
        let message = mail.into_message()?;
        self.transport
            .send(message)
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, DispatchError> {
        let builder = match settings.tls {
            SmtpTls::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .map_err(|e| DispatchError::Transport(e.to_string()))?,
            SmtpTls::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| DispatchError::Transport(e.to_string()))?,
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host),
        };

        let mut builder = builder.port(settings.port);
        if let Some((username, password)) = &settings.credentials {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(SmtpMailer {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn dispatch(&self, mail: OutgoingMail) -> Result<(), DispatchError> {
        let message = mail.into_message()?;
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| DispatchError::Transport(e.to_string()))
    }
}

/// Writes the message to the log instead of sending it.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn dispatch(&self, mail: OutgoingMail) -> Result<(), DispatchError> {
        let message = mail.into_message()?;
        tracing::info!(
            "Contact mail (not sent, log transport):\n{}",
            String::from_utf8_lossy(&message.formatted())
        );
        Ok(())
    }
}

pub fn mailer_from_config(config: &SiteConfig) -> Result<Arc<dyn Mailer>, DispatchError> {
    let mailer: Arc<dyn Mailer> = match &config.transport {
        MailTransport::Sendmail => Arc::new(SendmailMailer::new()),
        MailTransport::Smtp(settings) => Arc::new(SmtpMailer::new(settings)?),
        MailTransport::Log => Arc::new(LogMailer),
    };
    Ok(mailer)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::site_config::SiteConfig;
    use crate::models::contact_models::{validate, ContactSubmission};

    fn config(mail_from: Option<&str>) -> SiteConfig {
        let mail_from = mail_from.map(str::to_string);
        SiteConfig::from_lookup(|key| match key {
            "MAIL_FROM" => mail_from.clone(),
            "MAIL_TRANSPORT" => Some("log".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn jane() -> ValidContact {
        validate(ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn submitter_is_sender_without_configured_from() {
        let mail = OutgoingMail::compose(&config(None), &jane()).unwrap();
        assert_eq!(mail.from.email.to_string(), "jane@example.com");
        assert!(mail.reply_to.is_none());
        assert_eq!(mail.to.email.to_string(), "info@tenacare.com.au");
        assert_eq!(mail.subject, "New Contact Form Message");
    }

    #[test]
    fn submitter_moves_to_reply_to_with_configured_from() {
        let mail = OutgoingMail::compose(&config(Some("Website <web@tenacare.com.au>")), &jane()).unwrap();
        assert_eq!(mail.from.email.to_string(), "web@tenacare.com.au");
        assert_eq!(
            mail.reply_to.map(|m| m.email.to_string()),
            Some("jane@example.com".to_string())
        );
    }

    #[test]
    fn message_is_plain_text_with_reply_header() {
        let mail = OutgoingMail::compose(&config(Some("web@tenacare.com.au")), &jane()).unwrap();
        let formatted = String::from_utf8(mail.into_message().unwrap().formatted()).unwrap();
        assert!(formatted.contains("Reply-To: jane@example.com"));
        assert!(formatted.contains("Subject: New Contact Form Message"));
        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(formatted.contains("Message:"));
    }

    #[tokio::test]
    async fn log_mailer_accepts_valid_mail() {
        let mail = OutgoingMail::compose(&config(None), &jane()).unwrap();
        assert!(LogMailer.dispatch(mail).await.is_ok());
    }
}
