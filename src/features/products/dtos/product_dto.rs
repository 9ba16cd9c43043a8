use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::Product;

/// Request DTO for deriving a product listing from a certified contribution
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    /// Tracking code of the source contribution
    #[validate(length(min = 1, message = "Tracking code is required"))]
    pub tracking: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    /// Listing price in EUR
    pub price: Decimal,

    pub image_url: Option<String>,
}

/// Response DTO for a product listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub tracking: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub co2_saved: Option<f64>,
    pub water_saved: Option<f64>,
    pub natural_resources: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            tracking: p.tracking,
            title: p.title,
            description: p.description,
            price: p.price,
            co2_saved: p.co2_saved,
            water_saved: p.water_saved,
            natural_resources: p.natural_resources,
            image_url: p.image_url,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_create_dto_rejects_empty_tracking() {
        let dto = CreateProductDto {
            tracking: "".to_string(),
            title: "Camisola reciclada".to_string(),
            description: None,
            price: Decimal::from_str("12.50").unwrap(),
            image_url: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_price_deserializes_from_string() {
        let dto: CreateProductDto = serde_json::from_str(
            r#"{"tracking":"INF-0A1B2C3D","title":"Camisola","price":"19.90"}"#,
        )
        .unwrap();
        assert_eq!(dto.price, Decimal::from_str("19.90").unwrap());
    }
}
