use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Create routes for the auth feature
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_server() -> TestServer {
        TestServer::new(routes(Arc::new(AuthService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_login_accepts_hardcoded_pair() {
        let server = test_server();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "username": "admin", "password": "infinito2024" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["authenticated"], json!(true));
        assert_eq!(body["data"]["role"], json!("admin"));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_in_portuguese() {
        let server = test_server();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "username": "admin", "password": "password123" }))
            .await;

        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Credenciais inválidas"));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields_as_validation_error() {
        let server = test_server();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "username": "", "password": "" }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }
}
