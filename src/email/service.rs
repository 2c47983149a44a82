//! Email notification service using lettre

use std::sync::Arc;

use lettre::message::Mailbox;
use tracing::{info, warn};

use super::{EmailError, MailTransport, OutboundEmail, TlsMode, sender, smtp_transport};
use crate::config::EmailConfig;

/// Outcome of a successful [`EmailService::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivered {
    Sent,
    /// No relay configured, the notification went to the operator log.
    Logged,
}

impl Delivered {
    pub fn message(self) -> &'static str {
        match self {
            Delivered::Sent => "Email sent successfully",
            Delivered::Logged => "Email logged (SMTP not configured)",
        }
    }
}

#[derive(Clone)]
enum Delivery {
    Log,
    Relay {
        transport: Arc<dyn MailTransport>,
        from: Mailbox,
    },
}

/// Sends notifications, one attempt per call and no retries.
#[derive(Clone)]
pub struct EmailService {
    delivery: Delivery,
}

impl EmailService {
    /// Create a new email service from configuration
    ///
    /// Missing SMTP host, username or password is a supported mode: the service
    /// is built in log-only mode instead of failing.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let Some(settings) = config.smtp() else {
            warn!("SMTP credentials not configured, notifications will be logged instead of sent");
            return Ok(Self::log_only());
        };

        let from = sender(&config.from_name, config.from_address())?;

        info!(
            smtp_host = %settings.host,
            smtp_port = settings.port,
            tls = ?TlsMode::for_port(settings.port),
            from = %from,
            "Email service initialized"
        );

        Ok(Self::with_transport(from, Arc::new(smtp_transport(&settings)?)))
    }

    pub fn log_only() -> Self {
        Self {
            delivery: Delivery::Log,
        }
    }

    pub fn with_transport(from: Mailbox, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            delivery: Delivery::Relay { transport, from },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.delivery, Delivery::Relay { .. })
    }

    pub async fn send(&self, email: &OutboundEmail) -> Result<Delivered, EmailError> {
        let Delivery::Relay { transport, from } = &self.delivery else {
            info!(
                to = %email.to,
                subject = %email.subject,
                body = %email.text,
                "{}",
                Delivered::Logged.message()
            );

            return Ok(Delivered::Logged);
        };

        transport.deliver(from, email).await?;

        info!(to = %email.to, subject = %email.subject, "{}", Delivered::Sent.message());

        Ok(Delivered::Sent)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[derive(Default)]
    struct Recording(Mutex<Vec<OutboundEmail>>);

    #[async_trait]
    impl MailTransport for Recording {
        async fn deliver(&self, _from: &Mailbox, email: &OutboundEmail) -> Result<(), EmailError> {
            self.0.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    struct Refusing;

    #[async_trait]
    impl MailTransport for Refusing {
        async fn deliver(&self, _from: &Mailbox, _email: &OutboundEmail) -> Result<(), EmailError> {
            Err(EmailError::Transport("relay refused".to_string()))
        }
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "contact@clerint.org".to_string(),
            subject: "[Contact Form] Hello there".to_string(),
            text: "Message body".to_string(),
            html: "<p>Message body</p>".to_string(),
            reply_to: Some("jane@example.com".to_string()),
        }
    }

    fn from() -> Mailbox {
        sender("CLERINT", "no-reply@clerint.org").unwrap()
    }

    #[test]
    fn test_unconfigured_service_logs_only() {
        let service = EmailService::new(&EmailConfig::default()).unwrap();

        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_configured_service_uses_relay() {
        let config = EmailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_username: Some("mailer".to_string()),
            smtp_password: Some("secret".to_string()),
            ..EmailConfig::default()
        };

        let service = EmailService::new(&config).unwrap();

        assert!(service.is_configured());
    }

    #[tokio::test]
    async fn test_empty_from_email_falls_back_to_default_sender() {
        let config = EmailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_username: Some("mailer".to_string()),
            smtp_password: Some("secret".to_string()),
            from_email: String::new(),
            ..EmailConfig::default()
        };

        assert!(EmailService::new(&config).unwrap().is_configured());
    }

    #[tokio::test]
    async fn test_log_only_writes_recipient_subject_and_body() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let delivered = EmailService::log_only().send(&email()).await.unwrap();

        assert_eq!(delivered, Delivered::Logged);
        let output = logs.contents();
        assert!(output.contains("contact@clerint.org"), "{output}");
        assert!(output.contains("[Contact Form] Hello there"), "{output}");
        assert!(output.contains("Message body"), "{output}");
        assert!(output.contains("Email logged (SMTP not configured)"), "{output}");
    }

    #[tokio::test]
    async fn test_relay_delivers_exactly_once() {
        let transport = Arc::new(Recording::default());
        let service = EmailService::with_transport(from(), transport.clone());

        let delivered = service.send(&email()).await.unwrap();

        assert_eq!(delivered, Delivered::Sent);
        assert_eq!(*transport.0.lock().unwrap(), vec![email()]);
    }

    #[tokio::test]
    async fn test_relay_failure_propagates() {
        let service = EmailService::with_transport(from(), Arc::new(Refusing));

        let result = service.send(&email()).await;

        assert!(matches!(result, Err(EmailError::Transport(_))));
    }
}
