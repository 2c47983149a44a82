use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clerint_inquiry::ValidationError;
use serde::Serialize;
use thiserror::Error;

use crate::email::EmailError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Email error: {0}")]
    Email(#[from] EmailError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A failed form submission. Validation errors are shown as-is, everything
/// else is logged and replaced by the form's generic failure message.
#[derive(Debug)]
pub struct Rejection {
    pub form: &'static str,
    pub failure_message: &'static str,
    pub error: AppError,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let (status_code, error) = match self.error {
            AppError::Validation(e) => {
                tracing::info!(form = self.form, error = %e, "Submission rejected");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Body(e) => {
                tracing::error!(form = self.form, "Failed to read submission body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.failure_message.to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!(form = self.form, "Failed to render notification: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.failure_message.to_string(),
                )
            }
            AppError::Email(e) => {
                tracing::error!(form = self.form, "Failed to send notification: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.failure_message.to_string(),
                )
            }
        };

        (status_code, Json(ErrorBody { error })).into_response()
    }
}
