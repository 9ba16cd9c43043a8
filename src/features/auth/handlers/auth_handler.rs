use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginDto, LoginResponseDto};
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Admin dashboard login
///
/// Accepts only the exact hardcoded credential pair; anything else is a 401
/// with a Portuguese error message.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login accepted", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto)?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
