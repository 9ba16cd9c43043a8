use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contributions::models::{Contribution, TrackingState};

/// Request DTO for submitting a new contribution (public form)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContributionDto {
    /// Name of the submitter
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub nome: String,

    /// Optional contact email
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Optional contact phone
    #[validate(length(max = 32, message = "Phone must not exceed 32 characters"))]
    pub telefone: Option<String>,

    /// Category: "clothing" or "other"
    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub tipo: String,

    /// Estimated weight in kg
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub peso: Option<f64>,

    /// Free-text description of the items
    #[validate(length(max = 5000, message = "Details must not exceed 5000 characters"))]
    pub detalles: Option<String>,

    /// Uploaded item photos
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Request DTO for the admin full-field overwrite (PUT).
///
/// This is the declared whitelist: every field here is written on each PUT,
/// absent optional fields included (they overwrite with null). `tracking`,
/// `id`, timestamps and the certificate fields are not part of it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContributionDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub nome: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must not exceed 32 characters"))]
    pub telefone: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub tipo: String,

    /// Free-text lifecycle label shown to the user
    #[validate(length(min = 1, max = 255, message = "Status must be 1-255 characters"))]
    pub estado: String,

    /// Authoritative coarse lifecycle stage
    pub tracking_state: TrackingState,

    #[validate(range(min = 0.0, message = "co2Saved must not be negative"))]
    pub co2_saved: Option<f64>,

    #[validate(range(min = 0.0, message = "waterSaved must not be negative"))]
    pub water_saved: Option<f64>,

    #[validate(range(min = 0.0, message = "naturalResources must not be negative"))]
    pub natural_resources: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "cotton must be a percentage"))]
    pub cotton: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "polyester must be a percentage"))]
    pub polyester: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "wool must be a percentage"))]
    pub wool: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "otherFibers must be a percentage"))]
    pub other_fibers: Option<f64>,

    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub peso: Option<f64>,

    pub classification: Option<String>,
    pub destination: Option<String>,

    /// Marks the contribution as verified; flipping this to true issues the
    /// certificate (once, permanently)
    #[serde(default)]
    pub verified: bool,

    /// Admin performing the change; recorded as the certifier when the
    /// certificate is issued
    pub admin_user_id: Option<String>,

    #[validate(length(max = 5000, message = "Details must not exceed 5000 characters"))]
    pub detalles: Option<String>,

    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Query params for the session-scoped lookup
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct MyContributionsQuery {
    /// Email of the requesting user (the original app read this from the
    /// session; auth wiring is out of scope here)
    #[serde(default)]
    pub email: String,
}

/// Response DTO for a contribution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContributionResponseDto {
    pub id: Uuid,
    pub tracking: String,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    pub tipo: String,
    pub estado: String,
    pub tracking_state: TrackingState,
    pub co2_saved: Option<f64>,
    pub water_saved: Option<f64>,
    pub natural_resources: Option<f64>,
    pub cotton: Option<f64>,
    pub polyester: Option<f64>,
    pub wool: Option<f64>,
    pub other_fibers: Option<f64>,
    pub peso: Option<f64>,
    pub classification: Option<String>,
    pub destination: Option<String>,
    pub verified: bool,
    pub certificate_hash: Option<String>,
    pub certificate_date: Option<DateTime<Utc>>,
    pub admin_user_id: Option<String>,
    pub detalles: Option<String>,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contribution> for ContributionResponseDto {
    fn from(c: Contribution) -> Self {
        let tracking_state = c.stage();
        Self {
            id: c.id,
            tracking: c.tracking,
            nome: c.nome,
            email: c.email,
            telefone: c.telefone,
            tipo: c.tipo,
            estado: c.estado,
            tracking_state,
            co2_saved: c.co2_saved,
            water_saved: c.water_saved,
            natural_resources: c.natural_resources,
            cotton: c.cotton,
            polyester: c.polyester,
            wool: c.wool,
            other_fibers: c.other_fibers,
            peso: c.peso,
            classification: c.classification,
            destination: c.destination,
            verified: c.verified,
            certificate_hash: c.certificate_hash,
            certificate_date: c.certificate_date,
            admin_user_id: c.admin_user_id,
            detalles: c.detalles,
            image_urls: c.image_urls,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_dto_rejects_empty_name() {
        let dto = CreateContributionDto {
            nome: "".to_string(),
            email: None,
            telefone: None,
            tipo: "clothing".to_string(),
            peso: None,
            detalles: None,
            image_urls: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_bad_email() {
        let dto = CreateContributionDto {
            nome: "Maria Silva".to_string(),
            email: Some("not-an-email".to_string()),
            telefone: None,
            tipo: "clothing".to_string(),
            peso: None,
            detalles: None,
            image_urls: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_rejects_out_of_range_percentage() {
        let dto = UpdateContributionDto {
            nome: "Maria Silva".to_string(),
            email: None,
            telefone: None,
            tipo: "clothing".to_string(),
            estado: "recebido".to_string(),
            tracking_state: TrackingState::Received,
            co2_saved: None,
            water_saved: None,
            natural_resources: None,
            cotton: Some(120.0),
            polyester: None,
            wool: None,
            other_fibers: None,
            peso: None,
            classification: None,
            destination: None,
            verified: false,
            admin_user_id: None,
            detalles: None,
            image_urls: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_tracking_state_serializes_lowercase() {
        let json = serde_json::to_string(&TrackingState::Certified).unwrap();
        assert_eq!(json, "\"certified\"");
    }
}
