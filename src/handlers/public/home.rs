use axum::{http::StatusCode, response::Html, response::IntoResponse, Json};
use serde_json::json;

use crate::database::manager::DatabaseManager;

/// GET / - HTML greeting
pub async fn message() -> Html<&'static str> {
    Html("<h1>Hello World</h1>")
}

/// GET /health - liveness plus database connectivity
pub async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
