use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pickups::dtos::{CreatePickupDto, PickupResponseDto};
use crate::features::pickups::services::PickupService;
use crate::shared::types::ApiResponse;

/// List pickup requests (mock)
#[utoipa::path(
    get,
    path = "/api/pickups",
    responses(
        (status = 200, description = "Sample pickup requests", body = ApiResponse<Vec<PickupResponseDto>>),
    ),
    tag = "pickups"
)]
pub async fn list_pickups(
    State(service): State<Arc<PickupService>>,
) -> Result<Json<ApiResponse<Vec<PickupResponseDto>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None, None)))
}

/// Schedule a pickup (mock)
///
/// Echoes the submitted fields with a generated id; the request is not
/// persisted and a following GET will not include it.
#[utoipa::path(
    post,
    path = "/api/pickups",
    request_body = CreatePickupDto,
    responses(
        (status = 201, description = "Pickup acknowledged", body = ApiResponse<PickupResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "pickups"
)]
pub async fn create_pickup(
    State(service): State<Arc<PickupService>>,
    AppJson(dto): AppJson<CreatePickupDto>,
) -> Result<(StatusCode, Json<ApiResponse<PickupResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pickup = service.create(dto);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(pickup),
            Some("Recolha agendada. Entraremos em contacto.".to_string()),
            None,
        )),
    ))
}
