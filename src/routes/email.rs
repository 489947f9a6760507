use crate::config::Settings;
use crate::handlers::validation;
use crate::models::validation::{
    BulkEmailRequest, BulkValidationResponse, EmailRequest, ValidationQuery, ValidationResponse,
};
use actix_web::{HttpResponse, Responder, post, web};

/// # Email Validation Endpoint
///
/// Checks the syntax of a single email address: the user part against the
/// RFC 822 word grammar, and the domain part as either a bracketed IPv4
/// literal or a domain name with a recognized top-level domain.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
/// - Query Parameters:
///   - `allow_local` (optional): accept `localhost` style domains
///
/// ## Responses
/// - **200 OK**: Email is valid
/// - **400 Bad Request**: Email is invalid, or the body is not valid JSON
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    params(
        ("allow_local" = Option<bool>, Query, description = "Accept local domains such as localhost")
    ),
    responses(
        (status = 200, description = "Email is valid", body = ValidationResponse),
        (status = 400, description = "Invalid email", body = ValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    query: web::Query<ValidationQuery>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let allow_local = query.allow_local.unwrap_or(settings.allow_local);
    let response = validation::validate_email_address(&req.email, allow_local);

    if response.is_valid {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::BadRequest().json(response)
    }
}

/// # Bulk Email Validation Endpoint
///
/// Validates every address in the batch independently. Results are returned
/// in the order the addresses were submitted.
///
/// ## Responses
/// - **200 OK**: Validation results for all emails with counts
/// - **400 Bad Request**: Batch exceeds `MAX_BULK_EMAILS`
///
/// ## Example Request
/// ```json
/// { "emails": ["user1@example.com", "user2@example.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails-bulk",
    request_body = BulkEmailRequest,
    params(
        ("allow_local" = Option<bool>, Query, description = "Accept local domains such as localhost")
    ),
    responses(
        (status = 200, description = "Bulk validation results", body = BulkValidationResponse),
        (status = 400, description = "Batch too large", body = ValidationResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails-bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    query: web::Query<ValidationQuery>,
    settings: web::Data<Settings>,
) -> impl Responder {
    let allow_local = query.allow_local.unwrap_or(settings.allow_local);

    match validation::validate_emails_bulk(&req.emails, allow_local, settings.max_bulk_emails) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            HttpResponse::BadRequest().json(ValidationResponse::invalid(e.code(), e.to_string()))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_emails_bulk);
}

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;
