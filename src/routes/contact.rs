use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use clerint_inquiry::ContactPayload;

use crate::{
    error::Rejection,
    routes::AppState,
    submission::{self, Accepted},
};

/// POST /api/contact - routes the message to the team matching its inquiry type
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<Accepted>, Rejection> {
    submission::submit(&app_state.email, payload).await
}
