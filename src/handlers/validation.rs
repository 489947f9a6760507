use crate::models::validation::{
    BATCH_TOO_LARGE, BulkValidationResponse, BulkValidationResult, INVALID_DOMAIN, INVALID_SYNTAX,
    TldResponse, ValidationResponse,
};
use crate::validation::{DomainValidator, EmailValidator, tld};
use thiserror::Error;
use tracing::debug;

/// A bulk request carried more addresses than the configured limit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Batch of {size} emails exceeds the limit of {limit}")]
pub struct BatchTooLarge {
    pub size: usize,
    pub limit: usize,
}

impl BatchTooLarge {
    pub fn code(&self) -> &'static str {
        BATCH_TOO_LARGE
    }
}

pub fn validate_email_address(email: &str, allow_local: bool) -> ValidationResponse {
    let is_valid = EmailValidator::new(allow_local).is_valid(email);
    debug!(email, allow_local, is_valid, "validated email address");

    if is_valid {
        ValidationResponse::valid()
    } else {
        ValidationResponse::invalid(INVALID_SYNTAX, "Email address has invalid syntax")
    }
}

pub fn validate_domain_name(domain: &str, allow_local: bool) -> ValidationResponse {
    let is_valid = DomainValidator::new(allow_local).is_valid(domain);
    debug!(domain, allow_local, is_valid, "validated domain");

    if is_valid {
        ValidationResponse::valid()
    } else {
        ValidationResponse::invalid(
            INVALID_DOMAIN,
            "Domain name is malformed or has an unrecognized top-level domain",
        )
    }
}

/// Validates each address independently, keeping submission order.
pub fn validate_emails_bulk(
    emails: &[String],
    allow_local: bool,
    limit: usize,
) -> Result<BulkValidationResponse, BatchTooLarge> {
    if emails.len() > limit {
        return Err(BatchTooLarge {
            size: emails.len(),
            limit,
        });
    }

    let results: Vec<BulkValidationResult> = emails
        .iter()
        .map(|email| BulkValidationResult {
            email: email.clone(),
            validation: validate_email_address(email, allow_local),
        })
        .collect();

    let valid_count = results.iter().filter(|r| r.validation.is_valid).count() as i32;
    let invalid_count = results.len() as i32 - valid_count;

    Ok(BulkValidationResponse {
        results,
        valid_count,
        invalid_count,
    })
}

pub fn lookup_tld(tld: &str, allow_local: bool) -> TldResponse {
    TldResponse {
        tld: tld.to_string(),
        is_valid: tld::is_valid_tld_with(tld, allow_local),
        category: tld::category_of(tld).map(|category| category.as_str().to_string()),
    }
}
