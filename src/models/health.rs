use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// ## Fields
/// - `status`: String indicating service availability ("UP" or "DOWN")
/// - `timestamp`: RFC 3339 timestamp of the status check
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
