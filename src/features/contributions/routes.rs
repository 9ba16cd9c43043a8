use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::contributions::handlers;
use crate::features::contributions::services::ContributionService;

/// Create routes for the contributions feature
///
/// All routes are public; the admin dashboard gate is cosmetic and enforced
/// client-side only.
pub fn routes(service: Arc<ContributionService>) -> Router {
    Router::new()
        .route(
            "/api/contributions",
            get(handlers::list_contributions).post(handlers::create_contribution),
        )
        // Static segment must be declared alongside the capture; axum gives
        // "/me" priority over "/{tracking}"
        .route("/api/contributions/me", get(handlers::my_contributions))
        .route(
            "/api/contributions/{tracking}",
            get(handlers::get_contribution).put(handlers::update_contribution),
        )
        .with_state(service)
}
