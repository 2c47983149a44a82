use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use clerint_inquiry::DemoRequestPayload;

use crate::{
    error::Rejection,
    routes::AppState,
    submission::{self, Accepted},
};

/// POST /api/request-demo - always routed to the sales inbox
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<DemoRequestPayload>, JsonRejection>,
) -> Result<Json<Accepted>, Rejection> {
    submission::submit(&app_state.email, payload).await
}
