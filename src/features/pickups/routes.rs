use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pickups::handlers;
use crate::features::pickups::services::PickupService;

/// Create routes for the pickups feature
pub fn routes(service: Arc<PickupService>) -> Router {
    Router::new()
        .route(
            "/api/pickups",
            get(handlers::list_pickups).post(handlers::create_pickup),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_server() -> TestServer {
        TestServer::new(routes(Arc::new(PickupService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_post_echoes_fields_with_generated_id() {
        let server = test_server();

        let response = server
            .post("/api/pickups")
            .json(&json!({
                "telefone": "+351 900 000 000",
                "endereco": "Rua Nova 5, Porto",
                "peso": 3.2,
                "dia": "sexta"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));

        let data = &body["data"];
        assert_eq!(data["telefone"], json!("+351 900 000 000"));
        assert_eq!(data["endereco"], json!("Rua Nova 5, Porto"));
        assert_eq!(data["peso"], json!(3.2));
        assert_eq!(data["dia"], json!("sexta"));
        assert!(data["id"].is_string());
        assert_ne!(data["id"], json!(null));
    }

    #[tokio::test]
    async fn test_post_is_not_reflected_by_get() {
        let server = test_server();

        let before: Value = server.get("/api/pickups").await.json();

        server
            .post("/api/pickups")
            .json(&json!({
                "telefone": "+351 911 111 111",
                "endereco": "Travessa do Meio 3, Braga"
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let after: Value = server.get("/api/pickups").await.json();

        // Mock store: the list never changes
        assert_eq!(before["data"], after["data"]);
        assert!(!after["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["endereco"] == json!("Travessa do Meio 3, Braga")));
    }

    #[tokio::test]
    async fn test_post_rejects_empty_address() {
        let server = test_server();

        let response = server
            .post("/api/pickups")
            .json(&json!({ "telefone": "+351 900 000 000", "endereco": "" }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
    }
}
