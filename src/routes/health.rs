use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub checked_at: String,
}

// GET /health - Up only when the store answers a trivial query
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, "reachable"),
        Err(e) => {
            tracing::warn!("Health check could not reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
    };

    (status, Json(body))
}
