use crate::models::health::HealthResponse;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of service health status, mirroring the REST
/// health response.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
        }
    }
}

#[Object]
impl Health {
    /// Current service status, "UP" while the service is operational
    async fn status(&self) -> &str {
        &self.status
    }

    /// RFC 3339 timestamp of the check, in UTC
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(HealthResponse::up()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::DateTime;

    #[test]
    fn test_health_from_health_response() {
        let health_response = HealthResponse {
            status: "UP".to_string(),
            timestamp: "2025-04-19T12:00:00Z".to_string(),
        };

        let health = Health::from(health_response);

        assert_eq!(health.status, "UP");
        assert_eq!(health.timestamp, "2025-04-19T12:00:00Z");
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let schema = Schema::build(HealthQuery, EmptyMutation, EmptySubscription).finish();

        let result = schema.execute("{ health { status timestamp } }").await;
        assert!(result.errors.is_empty());

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
