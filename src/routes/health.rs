use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive, along with the mail delivery mode
pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    let mail = if app_state.email.is_configured() {
        "smtp"
    } else {
        "log"
    };

    (StatusCode::OK, Json(json!({"status": "ok", "mail": mail})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailService;

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = AppState {
            email: EmailService::log_only(),
        };

        let response = health(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["mail"], "log");
    }
}
