use axum::{
    Router,
    routing::{get, post},
};

use crate::email::EmailService;

mod contact;
mod health;
mod request_demo;

#[derive(Clone)]
pub struct AppState {
    pub email: EmailService,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/api/request-demo", post(request_demo::action))
        .with_state(app_state)
}
