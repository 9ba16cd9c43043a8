use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::contributions::{
    dtos as contributions_dtos, handlers as contributions_handlers, models as contributions_models,
};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::pickups::{dtos as pickups_dtos, handlers as pickups_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        // Contributions
        contributions_handlers::create_contribution,
        contributions_handlers::list_contributions,
        contributions_handlers::my_contributions,
        contributions_handlers::get_contribution,
        contributions_handlers::update_contribution,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::get_product,
        // Pickups
        pickups_handlers::list_pickups,
        pickups_handlers::create_pickup,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            Meta,
            auth_dtos::LoginDto,
            auth_dtos::LoginResponseDto,
            contributions_models::TrackingState,
            contributions_dtos::CreateContributionDto,
            contributions_dtos::UpdateContributionDto,
            contributions_dtos::ContributionResponseDto,
            products_dtos::CreateProductDto,
            products_dtos::ProductResponseDto,
            pickups_dtos::CreatePickupDto,
            pickups_dtos::PickupResponseDto,
            health_dtos::HealthResponseDto,
            health_dtos::DatabaseHealthDto,
            health_dtos::EnvPresenceDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<contributions_dtos::ContributionResponseDto>,
            ApiResponse<Vec<contributions_dtos::ContributionResponseDto>>,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<pickups_dtos::PickupResponseDto>,
            ApiResponse<Vec<pickups_dtos::PickupResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Admin dashboard login gate"),
        (name = "contributions", description = "Contribution submission, tracking and certification"),
        (name = "products", description = "Marketplace listings derived from certified contributions"),
        (name = "pickups", description = "Home pickup scheduling (mock)"),
        (name = "health", description = "Deployment diagnostics"),
    ),
    info(
        title = "INFINITO API",
        version = "0.1.0",
        description = "API documentation for the INFINITO textile circular-economy backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
