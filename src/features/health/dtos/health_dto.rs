use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health report for the service and its database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    /// "healthy" or "unhealthy"
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealthDto>,
    pub env: EnvPresenceDto,
    /// Error detail, present only when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Row counts proving the connection and the three tables are reachable
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthDto {
    pub connected: bool,
    pub contributions: i64,
    pub products: i64,
    pub pickup_requests: i64,
}

/// Presence (never values) of the environment variables the deployment
/// depends on
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvPresenceDto {
    pub database_url: bool,
    pub google_client_id: bool,
    pub google_client_secret: bool,
    pub nextauth_secret: bool,
    pub nextauth_url: bool,
    pub google_vision_api_key: bool,
    pub openai_api_key: bool,
    pub huggingface_api_key: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_presence_serializes_as_variable_names() {
        let env = EnvPresenceDto {
            database_url: true,
            google_client_id: false,
            google_client_secret: false,
            nextauth_secret: true,
            nextauth_url: true,
            google_vision_api_key: false,
            openai_api_key: false,
            huggingface_api_key: false,
        };
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["DATABASE_URL"], serde_json::json!(true));
        assert_eq!(value["OPENAI_API_KEY"], serde_json::json!(false));
    }
}
