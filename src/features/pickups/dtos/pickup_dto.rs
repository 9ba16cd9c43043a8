use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for scheduling a home pickup
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePickupDto {
    #[validate(length(min = 1, max = 32, message = "Phone must be 1-32 characters"))]
    pub telefone: String,

    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub endereco: String,

    /// Estimated weight in kg
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub peso: Option<f64>,

    /// Preferred pickup day, free text (e.g. "sábado de manhã")
    pub dia: Option<String>,
}

/// Response DTO for a pickup request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupResponseDto {
    pub id: Uuid,
    pub telefone: String,
    pub endereco: String,
    pub peso: Option<f64>,
    pub dia: Option<String>,
    pub status: String,
}
