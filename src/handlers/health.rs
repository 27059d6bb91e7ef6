use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::middleware::response::WebResponse;
use crate::routes::AppState;

/// GET /health - Store connectivity probe
pub async fn health(State(state): State<AppState>) -> WebResponse<Value> {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => WebResponse::ok(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            WebResponse::with_status(
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }),
            )
        }
    }
}
