use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::smtp::SmtpConfig;
use crate::core::Mailer;
use crate::domain::model::RenderedEmail;
use crate::utils::error::Result;

/// Delivery over SMTPS, the way the Gmail app-password flow expects.
/// The connection is opened lazily on the first send.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.sender_address.clone(),
                config.app_password.clone(),
            ))
            .build();
        let sender = config.sender_address.parse::<Mailbox>()?;

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, email: &RenderedEmail) -> Result<()> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(email.recipient.parse::<Mailbox>()?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())?;

        self.transport.send(message).await?;
        tracing::debug!("SMTP accepted message for {}", email.recipient);
        Ok(())
    }
}
