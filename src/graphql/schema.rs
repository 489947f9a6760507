use super::health::HealthQuery;
use super::validation::ValidatorQuery;
use crate::config::Settings;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query type, merging health checks with the validation operations.
#[derive(MergedObject)]
pub struct QueryRoot(HealthQuery, ValidatorQuery);

/// Main GraphQL Schema Definition
///
/// Mutations and subscriptions are unused: validation is read-only.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates a new GraphQL schema whose validation resolvers default to the
/// `allow_local` and batch limit settings.
///
/// # Example
///
/// ```rust,no_run
/// use address_validator::config::Settings;
/// use address_validator::graphql::schema::create_schema;
///
/// let schema = create_schema(&Settings::default());
/// ```
pub fn create_schema(settings: &Settings) -> AppSchema {
    let query = QueryRoot(
        HealthQuery,
        ValidatorQuery::new(settings.allow_local, settings.max_bulk_emails),
    );
    Schema::build(query, EmptyMutation, EmptySubscription).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_merges_health_and_validation() {
        let schema = create_schema(&Settings::default());
        let query = r#"{
            health { status }
            validateEmail(email: "jsmith@apache.org") { isValid }
            validateDomain(domain: "apache.org") { isValid }
            tld(tld: "org") { category }
        }"#;
        let result = schema.execute(query).await;
        assert!(result.errors.is_empty(), "{:?}", result.errors);

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["validateEmail"]["isValid"], true);
        assert_eq!(data["validateDomain"]["isValid"], true);
        assert_eq!(data["tld"]["category"], "generic");
    }

    #[tokio::test]
    async fn test_schema_uses_settings() {
        let settings = Settings {
            allow_local: true,
            ..Settings::default()
        };
        let schema = create_schema(&settings);
        let result = schema
            .execute(r#"{ validateEmail(email: "joe@localhost") { isValid } }"#)
            .await;
        let data = result.data.into_json().unwrap();
        assert_eq!(data["validateEmail"]["isValid"], true);
    }

    #[tokio::test]
    async fn test_schema_has_no_mutations() {
        let schema = create_schema(&Settings::default());
        let result = schema
            .execute("{ __schema { mutationType { name } } }")
            .await;
        let data = result.data.into_json().unwrap();
        assert!(data["__schema"]["mutationType"].is_null());
    }
}
