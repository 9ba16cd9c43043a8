use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a marketplace product derived from a certified
/// contribution. Created once, read thereafter.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub tracking: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub co2_saved: Option<f64>,
    pub water_saved: Option<f64>,
    pub natural_resources: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
