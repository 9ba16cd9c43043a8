use sqlx::PgPool;

use crate::core::config::IntegrationsConfig;
use crate::core::error::{AppError, Result};
use crate::features::health::dtos::{DatabaseHealthDto, EnvPresenceDto};

/// Deployment diagnostics: database reachability and env-variable presence.
/// Read-only, no side effects.
pub struct HealthService {
    pool: PgPool,
    integrations: IntegrationsConfig,
}

impl HealthService {
    pub fn new(pool: PgPool, integrations: IntegrationsConfig) -> Self {
        Self { pool, integrations }
    }

    /// Count all three tables; any failure fails the whole check
    pub async fn check_database(&self) -> Result<DatabaseHealthDto> {
        let contributions = self.count_table("contributions").await?;
        let products = self.count_table("products").await?;
        let pickup_requests = self.count_table("pickup_requests").await?;

        Ok(DatabaseHealthDto {
            connected: true,
            contributions,
            products,
            pickup_requests,
        })
    }

    /// Which env variables are configured. Presence only, never values.
    pub fn env_presence(&self) -> EnvPresenceDto {
        let i = &self.integrations;
        EnvPresenceDto {
            // The pool exists, so DATABASE_URL was set
            database_url: true,
            google_client_id: i.google_client_id.is_some(),
            google_client_secret: i.google_client_secret.is_some(),
            nextauth_secret: i.nextauth_secret.is_some(),
            nextauth_url: i.nextauth_url.is_some(),
            google_vision_api_key: i.google_vision_api_key.is_some(),
            openai_api_key: i.openai_api_key.is_some(),
            huggingface_api_key: i.huggingface_api_key.is_some(),
        }
    }

    async fn count_table(&self, table: &str) -> Result<i64> {
        // Table names come from the fixed list above, never from input
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Health count failed for {}: {:?}", table, e);
                AppError::Database(e)
            })
    }
}
