use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Derive a product listing from a certified contribution
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product listed", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown source contribution"),
        (status = 409, description = "Contribution not certified, or product already exists")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let (products, total) = service
        .list(pagination.limit(), pagination.offset())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(products),
        None,
        Some(Meta { total }),
    )))
}

/// Fetch a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}
