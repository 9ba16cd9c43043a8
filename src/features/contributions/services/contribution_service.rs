use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contributions::dtos::{
    ContributionResponseDto, CreateContributionDto, UpdateContributionDto,
};
use crate::features::contributions::models::Contribution;
use crate::features::contributions::services::tracking::{
    decide_certificate, generate_tracking_code,
};
use crate::shared::validation::escape_like;

/// How many times to retry an insert on a tracking-code collision
const TRACKING_INSERT_ATTEMPTS: u32 = 3;

/// Service for contribution lifecycle operations
pub struct ContributionService {
    pool: PgPool,
}

impl ContributionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new contribution from the public submission form.
    ///
    /// Issues a fresh tracking code; a collision with an existing code is
    /// caught by the unique constraint and the insert is retried with a
    /// new code.
    pub async fn create(&self, dto: CreateContributionDto) -> Result<ContributionResponseDto> {
        let mut last_err: Option<sqlx::Error> = None;

        for _ in 0..TRACKING_INSERT_ATTEMPTS {
            let tracking = generate_tracking_code();

            let inserted = sqlx::query_as::<_, Contribution>(
                r#"
                INSERT INTO contributions
                    (tracking, nome, email, telefone, tipo, peso, detalles, image_urls)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
                "#,
            )
            .bind(&tracking)
            .bind(&dto.nome)
            .bind(&dto.email)
            .bind(&dto.telefone)
            .bind(&dto.tipo)
            .bind(dto.peso)
            .bind(&dto.detalles)
            .bind(&dto.image_urls)
            .fetch_one(&self.pool)
            .await;

            match inserted {
                Ok(contribution) => {
                    tracing::info!(
                        "Contribution registered: tracking={}, tipo={}",
                        contribution.tracking,
                        contribution.tipo
                    );
                    return Ok(contribution.into());
                }
                Err(e) => {
                    let collision = e
                        .as_database_error()
                        .map(|d| d.is_unique_violation())
                        .unwrap_or(false);
                    if collision {
                        tracing::warn!("Tracking code collision on {}, retrying", tracking);
                        last_err = Some(e);
                        continue;
                    }
                    tracing::error!("Failed to insert contribution: {:?}", e);
                    return Err(AppError::Database(e));
                }
            }
        }

        tracing::error!("Exhausted tracking code attempts: {:?}", last_err);
        Err(AppError::Internal(
            "Could not issue a unique tracking code".to_string(),
        ))
    }

    /// Fetch a contribution by its exact tracking code
    pub async fn get_by_tracking(&self, tracking: &str) -> Result<ContributionResponseDto> {
        let contribution = self.fetch_by_tracking(tracking).await?;
        Ok(contribution.into())
    }

    /// Admin full-field overwrite across the declared whitelist.
    ///
    /// Last write wins; there is no optimistic concurrency check. The
    /// certificate is the exception: when the payload flips `verified` to
    /// true on a row without one, the hash and date are stamped in the same
    /// UPDATE, and once stamped the certificate fields and the verified
    /// flag never go back. The SET clauses enforce that directly (OR /
    /// COALESCE over the stored values), so a concurrent certification
    /// between the read and the write cannot be overwritten either.
    pub async fn update(
        &self,
        tracking: &str,
        dto: UpdateContributionDto,
    ) -> Result<ContributionResponseDto> {
        let existing = self.fetch_by_tracking(tracking).await?;

        let decision = decide_certificate(
            &existing.tracking,
            existing.certificate_hash.as_deref(),
            existing.certificate_date,
            existing.admin_user_id.as_deref(),
            dto.verified,
            dto.admin_user_id.as_deref(),
            Utc::now(),
            dto.co2_saved,
            dto.water_saved,
            dto.natural_resources,
        );
        if decision.verified && existing.certificate_hash.is_none() {
            tracing::info!(
                "Issuing certificate for tracking={}, admin={:?}",
                existing.tracking,
                dto.admin_user_id
            );
        }

        let updated = sqlx::query_as::<_, Contribution>(
            r#"
            UPDATE contributions SET
                nome = $1,
                email = $2,
                telefone = $3,
                tipo = $4,
                estado = $5,
                tracking_state = $6,
                co2_saved = $7,
                water_saved = $8,
                natural_resources = $9,
                cotton = $10,
                polyester = $11,
                wool = $12,
                other_fibers = $13,
                peso = $14,
                classification = $15,
                destination = $16,
                verified = verified OR $17,
                certificate_hash = COALESCE(certificate_hash, $18),
                certificate_date = COALESCE(certificate_date, $19),
                admin_user_id = CASE
                    WHEN certificate_hash IS NOT NULL THEN admin_user_id
                    ELSE $20
                END,
                detalles = $21,
                image_urls = $22,
                updated_at = NOW()
            WHERE tracking = $23
            RETURNING *
            "#,
        )
        .bind(&dto.nome)
        .bind(&dto.email)
        .bind(&dto.telefone)
        .bind(&dto.tipo)
        .bind(&dto.estado)
        .bind(dto.tracking_state.as_str())
        .bind(dto.co2_saved)
        .bind(dto.water_saved)
        .bind(dto.natural_resources)
        .bind(dto.cotton)
        .bind(dto.polyester)
        .bind(dto.wool)
        .bind(dto.other_fibers)
        .bind(dto.peso)
        .bind(&dto.classification)
        .bind(&dto.destination)
        .bind(decision.verified)
        .bind(&decision.hash)
        .bind(decision.date)
        .bind(&decision.admin_user_id)
        .bind(&dto.detalles)
        .bind(&dto.image_urls)
        .bind(&existing.tracking)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update contribution {}: {:?}", tracking, e);
            AppError::Database(e)
        })?;

        Ok(updated.into())
    }

    /// Heuristic owner lookup: contributions whose `nome` contains the
    /// email or its local-part as a substring. Not a foreign key; false
    /// positives and negatives are possible with the current schema.
    pub async fn find_for_email(&self, email: &str) -> Result<Vec<ContributionResponseDto>> {
        let local_part = email.split('@').next().unwrap_or(email);

        let rows = sqlx::query_as::<_, Contribution>(
            r#"
            SELECT * FROM contributions
            WHERE nome ILIKE $1 OR nome ILIKE $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(format!("%{}%", escape_like(email)))
        .bind(format!("%{}%", escape_like(local_part)))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up contributions for email: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|c| c.into()).collect())
    }

    /// Paginated listing for the admin dashboard, newest first
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ContributionResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contributions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, Contribution>(
            r#"
            SELECT * FROM contributions
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contributions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(|c| c.into()).collect(), total))
    }

    pub(crate) async fn fetch_by_tracking(&self, tracking: &str) -> Result<Contribution> {
        let contribution = sqlx::query_as::<_, Contribution>(
            "SELECT * FROM contributions WHERE tracking = $1",
        )
        .bind(tracking)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch contribution {}: {:?}", tracking, e);
            AppError::Database(e)
        })?;

        contribution.ok_or_else(|| {
            AppError::NotFound(format!("Contribution not found for tracking {}", tracking))
        })
    }
}
