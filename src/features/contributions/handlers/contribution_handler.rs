use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contributions::dtos::{
    ContributionResponseDto, CreateContributionDto, MyContributionsQuery, UpdateContributionDto,
};
use crate::features::contributions::services::ContributionService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};
use crate::shared::validation::is_unusable_tracking;

/// Reject tracking path segments a broken client sends for "no value":
/// empty strings and the literals "null"/"undefined" are a 400, never a 404.
fn require_usable_tracking(tracking: &str) -> Result<()> {
    if is_unusable_tracking(tracking) {
        return Err(AppError::BadRequest(
            "A valid tracking code is required".to_string(),
        ));
    }
    Ok(())
}

/// Submit a new contribution (public)
///
/// Issues the unique tracking code the user follows the donation with.
#[utoipa::path(
    post,
    path = "/api/contributions",
    request_body = CreateContributionDto,
    responses(
        (status = 201, description = "Contribution registered", body = ApiResponse<ContributionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contributions"
)]
pub async fn create_contribution(
    State(service): State<Arc<ContributionService>>,
    AppJson(dto): AppJson<CreateContributionDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContributionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contribution = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(contribution),
            Some("Contribuição registada. Guarde o seu código de rastreio.".to_string()),
            None,
        )),
    ))
}

/// List contributions (admin dashboard), newest first
#[utoipa::path(
    get,
    path = "/api/contributions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated contributions", body = ApiResponse<Vec<ContributionResponseDto>>),
    ),
    tag = "contributions"
)]
pub async fn list_contributions(
    State(service): State<Arc<ContributionService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContributionResponseDto>>>> {
    let (contributions, total) = service
        .list(pagination.limit(), pagination.offset())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(contributions),
        None,
        Some(Meta { total }),
    )))
}

/// Contributions belonging to the given email
///
/// Substring match against the submitter name field; heuristic, not a
/// foreign key.
#[utoipa::path(
    get,
    path = "/api/contributions/me",
    params(MyContributionsQuery),
    responses(
        (status = 200, description = "Matching contributions", body = ApiResponse<Vec<ContributionResponseDto>>),
        (status = 400, description = "Missing email parameter")
    ),
    tag = "contributions"
)]
pub async fn my_contributions(
    State(service): State<Arc<ContributionService>>,
    Query(query): Query<MyContributionsQuery>,
) -> Result<Json<ApiResponse<Vec<ContributionResponseDto>>>> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest(
            "The email query parameter is required".to_string(),
        ));
    }

    let contributions = service.find_for_email(email).await?;
    Ok(Json(ApiResponse::success(Some(contributions), None, None)))
}

/// Fetch a contribution by tracking code
#[utoipa::path(
    get,
    path = "/api/contributions/{tracking}",
    params(
        ("tracking" = String, Path, description = "Public tracking code")
    ),
    responses(
        (status = 200, description = "Contribution found", body = ApiResponse<ContributionResponseDto>),
        (status = 400, description = "Missing or unusable tracking code"),
        (status = 404, description = "Unknown tracking code")
    ),
    tag = "contributions"
)]
pub async fn get_contribution(
    State(service): State<Arc<ContributionService>>,
    Path(tracking): Path<String>,
) -> Result<Json<ApiResponse<ContributionResponseDto>>> {
    require_usable_tracking(&tracking)?;

    let contribution = service.get_by_tracking(&tracking).await?;
    Ok(Json(ApiResponse::success(Some(contribution), None, None)))
}

/// Overwrite a contribution (admin)
///
/// Full-field write across the declared whitelist; flipping `verified` to
/// true issues the certificate once and permanently.
#[utoipa::path(
    put,
    path = "/api/contributions/{tracking}",
    params(
        ("tracking" = String, Path, description = "Public tracking code")
    ),
    request_body = UpdateContributionDto,
    responses(
        (status = 200, description = "Contribution updated", body = ApiResponse<ContributionResponseDto>),
        (status = 400, description = "Missing tracking code or validation error"),
        (status = 404, description = "Unknown tracking code")
    ),
    tag = "contributions"
)]
pub async fn update_contribution(
    State(service): State<Arc<ContributionService>>,
    Path(tracking): Path<String>,
    AppJson(dto): AppJson<UpdateContributionDto>,
) -> Result<Json<ApiResponse<ContributionResponseDto>>> {
    require_usable_tracking(&tracking)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contribution = service.update(&tracking, dto).await?;
    Ok(Json(ApiResponse::success(Some(contribution), None, None)))
}
