//! Domain name validation.
//!
//! A domain is one or more labels followed by a purely alphabetic top label
//! of at least two characters, all separated by single dots. Labels consist
//! of ASCII letters, digits and hyphens, and may neither start nor end with
//! a hyphen. A syntactically valid domain is only accepted if its top label
//! is a recognized TLD.

use super::tld;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `(label '.')+ toplabel`, capturing the top label.
static DOMAIN_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+([A-Za-z]{2,})$")
        .expect("DOMAIN_NAME_REGEX is a valid regex pattern")
});

/// A single unqualified label, e.g. `localhost` or `machinename`.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$")
        .expect("HOSTNAME_REGEX is a valid regex pattern")
});

/// Validates domain names against the label grammar and the TLD registry.
///
/// The default validator rejects local names. With `allow_local` set it
/// also accepts domains ending in a local TLD (`localhost.localdomain`)
/// and bare hostnames (`localhost`, `hostname`).
///
/// # Examples
///
/// ```
/// use address_validator::validation::domain::DomainValidator;
///
/// let validator = DomainValidator::default();
/// assert!(validator.is_valid("www.apache.org"));
/// assert!(!validator.is_valid("localhost"));
///
/// let local = DomainValidator::new(true);
/// assert!(local.is_valid("localhost"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainValidator {
    allow_local: bool,
}

impl DomainValidator {
    pub fn new(allow_local: bool) -> Self {
        Self { allow_local }
    }

    pub fn allow_local(&self) -> bool {
        self.allow_local
    }

    /// Returns `true` if `domain` parses as a domain name with a recognized
    /// top-level domain.
    ///
    /// The input is matched as-is: surrounding whitespace makes it invalid.
    pub fn is_valid(&self, domain: &str) -> bool {
        if let Some(captures) = DOMAIN_NAME_REGEX.captures(domain) {
            let top_label = &captures[1];
            if self.is_valid_tld(top_label) {
                return true;
            }
            trace!(domain, top_label, "unrecognized top-level domain");
            return false;
        }

        if self.allow_local && HOSTNAME_REGEX.is_match(domain) {
            return true;
        }

        trace!(domain, "domain does not match label grammar");
        false
    }

    /// Returns `true` if `tld` is a recognized TLD, counting local TLDs
    /// only when this validator allows them.
    pub fn is_valid_tld(&self, tld: &str) -> bool {
        tld::is_valid_tld_with(tld, self.allow_local)
    }
}

/// Validates `domain` with the default, non-local [`DomainValidator`].
pub fn is_valid_domain(domain: &str) -> bool {
    DomainValidator::default().is_valid(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::tld::TldCategory;

    #[test]
    fn test_valid_domains() {
        let valid = [
            "apache.org",
            "www.google.com",
            "test-domain.com",
            "test---domain.com",
            "test-d-o-m-ain.com",
            "as.uk",
            "ApAchE.Org",
            "z.com",
            "i.have.an-example.domain.name",
            "1.2.3.arpa",
        ];
        for domain in valid {
            assert!(is_valid_domain(domain), "{domain} should validate");
        }
    }

    #[test]
    fn test_invalid_domains() {
        let invalid = [
            ".org",
            " apache.org ",
            "apa che.org",
            "-testdomain.name",
            "testdomain-.name",
            "---c.com",
            "c--.com",
            "apache.rog",
            "http://www.apache.org",
            " ",
            "",
            "org",
            "apache..org",
            "apache.org.",
            "apache.c",
            "apache.c0m",
            "data-workshop.-com",
            "data-workshop.c-om",
            "abc_def.com",
            "apa,che.org",
        ];
        for domain in invalid {
            assert!(!is_valid_domain(domain), "{domain:?} shouldn't validate");
        }
    }

    #[test]
    fn test_every_registered_tld_accepts_a_label() {
        for category in [TldCategory::Generic, TldCategory::CountryCode] {
            for tld in category.tlds() {
                let domain = format!("label.{tld}");
                assert!(is_valid_domain(&domain), "{domain} should validate");
                let domain = format!("a1.{}", tld.to_uppercase());
                assert!(is_valid_domain(&domain), "{domain} should validate");
            }
        }
    }

    #[test]
    fn test_allow_local() {
        let no_local = DomainValidator::default();
        let allow_local = DomainValidator::new(true);

        assert!(!no_local.is_valid("localhost.localdomain"));
        assert!(!no_local.is_valid("localhost"));

        assert!(allow_local.is_valid("localhost.localdomain"));
        assert!(allow_local.is_valid("localhost"));
        assert!(allow_local.is_valid("hostname"));
        assert!(allow_local.is_valid("machinename"));

        assert!(allow_local.is_valid("apache.org"));
        assert!(!allow_local.is_valid(" apache.org "));
        assert!(!allow_local.is_valid("-hostname"));
        assert!(!allow_local.is_valid("apache.rog"));
    }

    #[test]
    fn test_validator_tld_check() {
        assert!(!DomainValidator::default().is_valid_tld("localhost"));
        assert!(DomainValidator::new(true).is_valid_tld(".LOCALHOST"));
        assert!(DomainValidator::default().is_valid_tld(".com"));
    }

    #[test]
    fn test_long_ambiguous_labels() {
        let label = format!("a{}a", "-".repeat(10_000));
        assert!(is_valid_domain(&format!("{label}.com")));

        let bogus = format!("{}.com", "a-".repeat(10_000));
        assert!(!is_valid_domain(&bogus));
    }

    #[test]
    fn test_repeated_validation_is_stable() {
        for _ in 0..3 {
            assert!(is_valid_domain("apache.org"));
            assert!(!is_valid_domain("apache.rog"));
        }
    }
}
