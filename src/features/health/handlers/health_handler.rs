use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::features::health::dtos::HealthResponseDto;
use crate::features::health::services::HealthService;

/// Deployment health check
///
/// Reports "healthy" only when the database connection and all three table
/// counts succeed; any failure yields a 500 with "unhealthy" and the error
/// message. Env variables are reported by presence, never value.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponseDto),
        (status = 500, description = "Service unhealthy", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(service): State<Arc<HealthService>>,
) -> (StatusCode, Json<HealthResponseDto>) {
    let env = service.env_presence();

    match service.check_database().await {
        Ok(database) => (
            StatusCode::OK,
            Json(HealthResponseDto {
                status: "healthy".to_string(),
                timestamp: Utc::now(),
                database: Some(database),
                env,
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponseDto {
                status: "unhealthy".to_string(),
                timestamp: Utc::now(),
                database: None,
                env,
                error: Some(e.to_string()),
            }),
        ),
    }
}
