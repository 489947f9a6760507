use crate::config::Settings;
use crate::handlers::validation;
use crate::models::validation::{DomainRequest, TldResponse, ValidationQuery, ValidationResponse};
use actix_web::{HttpResponse, Responder, get, post, web};

/// # Domain Validation Endpoint
///
/// Checks that a domain is a dot-separated sequence of labels ending in a
/// recognized top-level domain. The input is not trimmed.
///
/// ## Responses
/// - **200 OK**: Domain is valid
/// - **400 Bad Request**: Domain is invalid
///
/// ## Example Request
/// ```json
/// { "domain": "www.apache.org" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-domain",
    request_body = DomainRequest,
    params(
        ("allow_local" = Option<bool>, Query, description = "Accept local domains such as localhost")
    ),
    responses(
        (status = 200, description = "Domain is valid", body = ValidationResponse),
        (status = 400, description = "Invalid domain", body = ValidationResponse)
    ),
    tag = "Domain Validation"
)]
#[post("/validate-domain")]
pub async fn validate_domain(
    req: web::Json<DomainRequest>,
    query: web::Query<ValidationQuery>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let allow_local = query.allow_local.unwrap_or(settings.allow_local);
    let response = validation::validate_domain_name(&req.domain, allow_local);

    if response.is_valid {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::BadRequest().json(response)
    }
}

/// # TLD Lookup Endpoint
///
/// Reports whether a top-level domain is recognized and which registry
/// category it belongs to. A single leading dot is ignored.
///
/// ## Example Response
/// ```json
/// { "tld": "uk", "is_valid": true, "category": "country_code" }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/tld/{tld}",
    params(
        ("tld" = String, Path, description = "Top-level domain to look up"),
        ("allow_local" = Option<bool>, Query, description = "Count local TLDs as valid")
    ),
    responses(
        (status = 200, description = "TLD lookup result", body = TldResponse)
    ),
    tag = "Domain Validation"
)]
#[get("/tld/{tld}")]
pub async fn check_tld(
    path: web::Path<String>,
    query: web::Query<ValidationQuery>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let allow_local = query.allow_local.unwrap_or(settings.allow_local);
    HttpResponse::Ok().json(validation::lookup_tld(&path, allow_local))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_domain).service(check_tld);
}
