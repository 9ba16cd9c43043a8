use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Coarse lifecycle stage of a contribution, as shown on the public
/// tracking page. `estado` is the free-text label admins set alongside it;
/// this enum is the authoritative, machine-readable stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrackingState {
    #[default]
    Registered,
    Received,
    Processed,
    Certified,
}

impl TrackingState {
    /// Position in the lifecycle, for ordering comparisons
    pub fn rank(&self) -> u8 {
        match self {
            TrackingState::Registered => 0,
            TrackingState::Received => 1,
            TrackingState::Processed => 2,
            TrackingState::Certified => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingState::Registered => "registered",
            TrackingState::Received => "received",
            TrackingState::Processed => "processed",
            TrackingState::Certified => "certified",
        }
    }
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(TrackingState::Registered),
            "received" => Ok(TrackingState::Received),
            "processed" => Ok(TrackingState::Processed),
            "certified" => Ok(TrackingState::Certified),
            other => Err(format!("Unknown tracking state: {}", other)),
        }
    }
}

/// Database model for a contribution (one donation event)
#[derive(Debug, Clone, FromRow)]
pub struct Contribution {
    pub id: Uuid,
    pub tracking: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: String,
    pub estado: String,
    pub tracking_state: String,
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

impl Contribution {
    /// Parsed lifecycle stage. Rows are only written through the service,
    /// so an unparseable value means manual tampering; fall back to the
    /// initial stage rather than failing the read.
    pub fn stage(&self) -> TrackingState {
        TrackingState::from_str(&self.tracking_state).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_state_roundtrip() {
        for state in [
            TrackingState::Registered,
            TrackingState::Received,
            TrackingState::Processed,
            TrackingState::Certified,
        ] {
            assert_eq!(TrackingState::from_str(state.as_str()), Ok(state));
        }
    }

    #[test]
    fn test_tracking_state_ordering() {
        assert!(TrackingState::Registered.rank() < TrackingState::Received.rank());
        assert!(TrackingState::Received.rank() < TrackingState::Processed.rank());
        assert!(TrackingState::Processed.rank() < TrackingState::Certified.rank());
    }

    #[test]
    fn test_tracking_state_rejects_unknown() {
        assert!(TrackingState::from_str("shipped").is_err());
        assert!(TrackingState::from_str("CERTIFIED").is_err());
        assert!(TrackingState::from_str("").is_err());
    }
}
