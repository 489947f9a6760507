use crate::handlers::validation;
use crate::models::validation::{BulkValidationResponse, TldResponse, ValidationResponse};
use async_graphql::{Context, Object, Result};

/// Validation query operations.
///
/// Every resolver takes an optional `allowLocal` argument; when omitted the
/// server-wide default this query was built with applies.
pub struct ValidatorQuery {
    allow_local: bool,
    max_bulk_emails: usize,
}

impl ValidatorQuery {
    pub fn new(allow_local: bool, max_bulk_emails: usize) -> Self {
        Self {
            allow_local,
            max_bulk_emails,
        }
    }
}

#[Object]
impl ValidatorQuery {
    /// Validates a single email address.
    async fn validate_email(
        &self,
        _ctx: &Context<'_>,
        email: String,
        allow_local: Option<bool>,
    ) -> ValidationResponse {
        validation::validate_email_address(&email, allow_local.unwrap_or(self.allow_local))
    }

    /// Validates a batch of email addresses, keeping submission order.
    async fn validate_emails_bulk(
        &self,
        _ctx: &Context<'_>,
        emails: Vec<String>,
        allow_local: Option<bool>,
    ) -> Result<BulkValidationResponse> {
        let response = validation::validate_emails_bulk(
            &emails,
            allow_local.unwrap_or(self.allow_local),
            self.max_bulk_emails,
        )?;
        Ok(response)
    }

    /// Validates a domain name.
    async fn validate_domain(
        &self,
        _ctx: &Context<'_>,
        domain: String,
        allow_local: Option<bool>,
    ) -> ValidationResponse {
        validation::validate_domain_name(&domain, allow_local.unwrap_or(self.allow_local))
    }

    /// Looks up a top-level domain in the registry.
    async fn tld(&self, _ctx: &Context<'_>, tld: String, allow_local: Option<bool>) -> TldResponse {
        validation::lookup_tld(&tld, allow_local.unwrap_or(self.allow_local))
    }
}
