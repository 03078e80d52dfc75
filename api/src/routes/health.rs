use crate::models::HealthStatus;
use axum::Json;

/// GET / and GET /health
/// Response: 200 OK with `{"status":"ok","service":"...","timestamp":"..."}`
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}
