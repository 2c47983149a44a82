//! Shared fixtures for driving the router in integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use clerint::email::{EmailError, EmailService, MailTransport, OutboundEmail, sender};
use http_body_util::BodyExt;
use lettre::message::Mailbox;
use serde_json::Value;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

/// Transport that keeps every notification it is asked to deliver.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, _from: &Mailbox, email: &OutboundEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Transport that builds the full MIME message, as the SMTP relay does, and
/// keeps its wire form.
#[derive(Default)]
pub struct MessageTransport {
    messages: Mutex<Vec<String>>,
}

impl MessageTransport {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for MessageTransport {
    async fn deliver(&self, from: &Mailbox, email: &OutboundEmail) -> Result<(), EmailError> {
        let message = email.to_message(from)?;
        let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
        self.messages.lock().unwrap().push(formatted);
        Ok(())
    }
}

/// Transport that fails every delivery with a detailed relay error.
pub struct FailingTransport;

pub const RELAY_FAILURE: &str = "554 relay access denied for smtp.internal.example:2525";

#[async_trait]
impl MailTransport for FailingTransport {
    async fn deliver(&self, _from: &Mailbox, _email: &OutboundEmail) -> Result<(), EmailError> {
        Err(EmailError::Transport(RELAY_FAILURE.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
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

/// Routes this thread's log output into a buffer until the guard is dropped.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);

    (logs, guard)
}

pub fn recording_app() -> (Router, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let from = sender("CLERINT", "no-reply@clerint.org").unwrap();
    let app = clerint::app(EmailService::with_transport(from, transport.clone()));

    (app, transport)
}

pub fn message_app() -> (Router, Arc<MessageTransport>) {
    let transport = Arc::new(MessageTransport::default());
    let from = sender("CLERINT", "no-reply@clerint.org").unwrap();
    let app = clerint::app(EmailService::with_transport(from, transport.clone()));

    (app, transport)
}

pub fn failing_app() -> Router {
    let from = sender("CLERINT", "no-reply@clerint.org").unwrap();

    clerint::app(EmailService::with_transport(from, Arc::new(FailingTransport)))
}

pub fn unconfigured_app() -> Router {
    clerint::app(EmailService::log_only())
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}
