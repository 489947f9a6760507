use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INVALID_SYNTAX: &str = "INVALID_SYNTAX";
pub const INVALID_DOMAIN: &str = "INVALID_DOMAIN";
pub const BATCH_TOO_LARGE: &str = "BATCH_TOO_LARGE";

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct DomainRequest {
    pub domain: String,
}

/// Query string accepted by every validation endpoint.
///
/// `allow_local` overrides the server-wide default when present.
#[derive(Deserialize, Default)]
pub struct ValidationQuery {
    #[serde(default)]
    pub allow_local: Option<bool>,
}

/// Why an input was rejected.
#[derive(SimpleObject, ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationError {
    /// INVALID_SYNTAX, INVALID_DOMAIN or BATCH_TOO_LARGE
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Verdict for a single email address or domain.
#[derive(SimpleObject, ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationResponse {
    /// Whether the input is valid
    pub is_valid: bool,
    /// "VALID" when valid, otherwise null
    pub status: Option<String>,
    /// Error information if validation failed, otherwise null
    pub error: Option<ValidationError>,
}

impl ValidationResponse {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            status: Some("VALID".to_string()),
            error: None,
        }
    }

    pub fn invalid(code: &str, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            status: None,
            error: Some(ValidationError {
                code: code.to_string(),
                message: message.into(),
            }),
        }
    }
}

#[derive(SimpleObject, ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BulkValidationResult {
    /// The email address as submitted
    pub email: String,
    pub validation: ValidationResponse,
}

#[derive(SimpleObject, ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BulkValidationResponse {
    /// One entry per submitted address, in submission order
    pub results: Vec<BulkValidationResult>,
    pub valid_count: i32,
    pub invalid_count: i32,
}

/// Registry lookup for a single top-level domain.
#[derive(SimpleObject, ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TldResponse {
    /// The TLD as submitted
    pub tld: String,
    /// Whether the TLD is accepted in a domain name
    pub is_valid: bool,
    /// infrastructure, generic, country_code, local, or null if unknown
    pub category: Option<String>,
}
