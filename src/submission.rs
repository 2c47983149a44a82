//! The validate → render → dispatch pipeline shared by every lead-capture form.

use axum::{Json, extract::rejection::JsonRejection};
use clerint_inquiry::{Inquiry, Payload};
use serde::Serialize;

use crate::{
    email::{Delivered, EmailService, OutboundEmail},
    error::{AppError, Rejection},
    notification::Notification,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Accepted {
    pub success: bool,
    pub message: &'static str,
}

/// Handles one submission of form `P`, sending at most one notification.
pub async fn submit<P>(
    email: &EmailService,
    payload: Result<Json<P>, JsonRejection>,
) -> Result<Json<Accepted>, Rejection>
where
    P: Payload,
    P::Inquiry: Notification,
{
    match process::<P>(email, payload).await {
        Ok(_) => Ok(Json(Accepted {
            success: true,
            message: <P::Inquiry as Notification>::ACCEPTED_MESSAGE,
        })),
        Err(error) => Err(Rejection {
            form: <P::Inquiry as Notification>::FORM,
            failure_message: <P::Inquiry as Notification>::FAILURE_MESSAGE,
            error,
        }),
    }
}

async fn process<P>(
    email: &EmailService,
    payload: Result<Json<P>, JsonRejection>,
) -> Result<Delivered, AppError>
where
    P: Payload,
    P::Inquiry: Notification,
{
    let Json(payload) = payload?;
    let inquiry = payload.into_inquiry()?;

    let recipient = inquiry.recipient();
    let rendered = inquiry.render()?;

    let outbound = OutboundEmail {
        to: recipient.address().to_owned(),
        subject: inquiry.subject(),
        text: rendered.text,
        html: rendered.html,
        reply_to: Some(inquiry.reply_to().to_owned()),
    };

    let delivered = email.send(&outbound).await?;

    tracing::info!(
        form = <P::Inquiry as Notification>::FORM,
        recipient = %recipient,
        delivered = ?delivered,
        "Inquiry processed"
    );

    Ok(delivered)
}
