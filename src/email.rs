//! Notification delivery through an SMTP relay, with a logging fallback
//! when no relay is configured.

use lettre::message::{Mailbox, MultiPart, header::ContentType};
use lettre::{Address, Message};
use thiserror::Error;
use tracing::warn;

mod service;
mod transport;

pub use service::{Delivered, EmailService};
pub use transport::{MailTransport, TlsMode, smtp_transport};

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Failure reported by a [`MailTransport`] that does not speak SMTP itself.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// A rendered notification, built per submission and dropped once sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<String>,
}

impl OutboundEmail {
    /// Builds a multipart/alternative message carrying both bodies.
    ///
    /// A reply-to address that lettre cannot parse is dropped so the
    /// notification still goes out.
    pub fn to_message(&self, from: &Mailbox) -> Result<Message, EmailError> {
        let mut builder = Message::builder()
            .from(from.clone())
            .to(Mailbox::new(None, self.to.parse::<Address>()?))
            .subject(&self.subject);

        if let Some(reply_to) = &self.reply_to {
            match reply_to.parse::<Address>() {
                Ok(address) => builder = builder.reply_to(Mailbox::new(None, address)),
                Err(e) => warn!(reply_to = %reply_to, error = %e, "Sending without Reply-To"),
            }
        }

        let message = builder.multipart(
            MultiPart::alternative()
                .singlepart(
                    lettre::message::SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(self.text.clone()),
                )
                .singlepart(
                    lettre::message::SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(self.html.clone()),
                ),
        )?;

        Ok(message)
    }
}

/// Sender mailbox, e.g. `CLERINT <no-reply@clerint.org>`.
pub fn sender(name: &str, email: &str) -> Result<Mailbox, EmailError> {
    Ok(Mailbox::new(Some(name.to_owned()), email.parse::<Address>()?))
}
