use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contributions::models::{Contribution, TrackingState};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto};
use crate::features::products::models::Product;

/// Service for marketplace product listings
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Derive a product listing from a certified contribution.
    ///
    /// The one-product-per-contribution rule is an application-level check
    /// (no unique constraint on products.tracking): a concurrent pair of
    /// inserts for the same tracking can both pass the check, matching the
    /// behavior the schema was designed around.
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let contribution = sqlx::query_as::<_, Contribution>(
            "SELECT * FROM contributions WHERE tracking = $1",
        )
        .bind(&dto.tracking)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| {
            AppError::NotFound(format!("Contribution not found for tracking {}", dto.tracking))
        })?;

        if contribution.stage().rank() < TrackingState::Certified.rank() {
            return Err(AppError::Conflict(format!(
                "Contribution {} is not certified yet",
                contribution.tracking
            )));
        }

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE tracking = $1",
        )
        .bind(&dto.tracking)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if existing > 0 {
            return Err(AppError::Conflict(format!(
                "A product already exists for tracking {}",
                dto.tracking
            )));
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (tracking, title, description, price,
                 co2_saved, water_saved, natural_resources, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&dto.tracking)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(contribution.co2_saved)
        .bind(contribution.water_saved)
        .bind(contribution.natural_resources)
        .bind(&dto.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Product listed: id={}, tracking={}",
            product.id,
            product.tracking
        );

        Ok(product.into())
    }

    /// Paginated product listing, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<ProductResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT * FROM products
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(|p| p.into()).collect(), total))
    }

    /// Fetch a single product by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product not found: {}", id)))
    }
}
