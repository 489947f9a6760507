use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use address_validator::config::Settings;
use address_validator::graphql::schema::create_schema;
use address_validator::openapi::ApiDoc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Address Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST validation endpoints under `/api/v1`
/// - GraphQL endpoint powered by Async-GraphQL
/// - Swagger UI for API documentation
///
/// # Endpoints
/// - REST: `/api/v1/...` (configured in routes)
/// - GraphQL: `/api/v1/graphql`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// Environment variables, optionally from a `.env` file; see [`Settings`].
/// Log filtering follows `RUST_LOG` and defaults to `info`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    info!(
        host = %settings.host,
        port = settings.port,
        allow_local = settings.allow_local,
        max_bulk_emails = settings.max_bulk_emails,
        "starting address validator"
    );

    let schema = create_schema(&settings);
    let bind_addr = (settings.host.clone(), settings.port);
    let settings = Data::new(settings);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(settings.clone())
            .app_data(Data::new(schema.clone()))
            .configure(address_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(bind_addr)?
    .run()
    .await
}
