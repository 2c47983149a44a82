use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use super::{EmailError, OutboundEmail};
use crate::config::SmtpSettings;

/// Something that can hand a rendered notification to a mail server.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, from: &Mailbox, email: &OutboundEmail) -> Result<(), EmailError>;
}

#[async_trait]
impl MailTransport for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, from: &Mailbox, email: &OutboundEmail) -> Result<(), EmailError> {
        let message = email.to_message(from)?;
        AsyncTransport::send(self, message).await?;

        Ok(())
    }
}

/// How the SMTP connection is secured, derived from the relay port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS from the first byte (SMTPS, port 465)
    Implicit,
    /// STARTTLS upgrade that must succeed (submission, port 587)
    StartTls,
    /// STARTTLS when the server offers it, plaintext otherwise
    Opportunistic,
}

impl TlsMode {
    pub fn for_port(port: u16) -> Self {
        match port {
            465 => TlsMode::Implicit,
            587 => TlsMode::StartTls,
            _ => TlsMode::Opportunistic,
        }
    }
}

/// Builds an authenticated relay transport. No connection is opened until the first send.
pub fn smtp_transport(
    settings: &SmtpSettings,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
    let builder = match TlsMode::for_port(settings.port) {
        TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?,
        TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?,
        TlsMode::Opportunistic => {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
                .tls(Tls::Opportunistic(TlsParameters::new(settings.host.clone())?))
        }
    };

    let credentials = Credentials::new(settings.username.clone(), settings.password.clone());

    Ok(builder.port(settings.port).credentials(credentials).build())
}
