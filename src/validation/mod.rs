//! Syntactic validation of domain names and email addresses.
//!
//! Every check here is a pure function of its input: no I/O, no DNS, and no
//! state beyond the read-only TLD registry. Failures are reported as a plain
//! `false`; callers that need to know *why* an input was rejected can enable
//! `trace` level logging for this module.

/// Validates a dot-separated hostname against the label grammar and checks
/// its final label against the TLD registry.
///
/// # Examples
/// ```
/// use address_validator::validation::domain::is_valid_domain;
///
/// assert!(is_valid_domain("ApAchE.Org"));
/// assert!(!is_valid_domain(".org"));
/// assert!(!is_valid_domain("-testdomain.name"));
/// ```
pub mod domain;

/// Validates an email address: an RFC 822 style user part, then either a
/// bracketed IPv4 literal or a symbolic domain.
///
/// # Examples
/// ```
/// use address_validator::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("jsmith@apache.org"));
/// assert!(!is_valid_email("plainaddress"));
/// ```
pub mod syntax;

/// Immutable sets of recognized top-level domains.
pub mod tld;

pub use domain::{DomainValidator, is_valid_domain};
pub use syntax::{EmailValidator, is_valid_email};
pub use tld::{
    TldCategory, category_of, is_valid_country_code_tld, is_valid_generic_tld,
    is_valid_infrastructure_tld, is_valid_local_tld, is_valid_tld, is_valid_tld_with,
};
