use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health` returns `{"status": "UP", "timestamp": ...}`.
pub mod health;

/// # Email Validation Endpoints
///
/// Single and bulk email address validation.
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
pub mod email;

/// # Domain Validation Endpoints
///
/// Domain name validation and top-level domain lookup.
pub mod domain;

/// GraphQL endpoint and playground.
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health                - Service health status
/// POST /api/v1/validate-email        - Single email validation
/// POST /api/v1/validate-emails-bulk  - Bulk email validation
/// POST /api/v1/validate-domain       - Domain validation
/// GET  /api/v1/tld/{tld}             - TLD lookup
/// POST /api/v1/graphql               - GraphQL endpoint
/// GET  /api/v1/playground            - GraphQL playground
/// ```
///
/// Handlers expect [`Settings`](crate::config::Settings) and the GraphQL
/// schema to be registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(domain::configure_routes)
            .configure(graphql::configure_routes),
    );
}
