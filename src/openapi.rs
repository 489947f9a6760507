use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// REST handlers. The GraphQL endpoint is listed by tag only.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`, `POST /api/v1/validate-emails-bulk`
/// - Domain Validation: `POST /api/v1/validate-domain`, `GET /api/v1/tld/{tld}`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
        crate::routes::domain::validate_domain,
        crate::routes::domain::check_tld,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::validation::EmailRequest,
            crate::models::validation::BulkEmailRequest,
            crate::models::validation::DomainRequest,
            crate::models::validation::ValidationError,
            crate::models::validation::ValidationResponse,
            crate::models::validation::BulkValidationResult,
            crate::models::validation::BulkValidationResponse,
            crate::models::validation::TldResponse,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address syntax validation endpoints"),
        (name = "Domain Validation", description = "Domain name and top-level domain endpoints"),
        (name = "GraphQL", description = "GraphQL API exposing the same validation operations")
    ),
    info(
        description = "Syntactic validation of email addresses and domain names with REST and GraphQL interfaces",
        title = "Address Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
