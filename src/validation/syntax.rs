use super::domain::DomainValidator;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Splits an address at its last `@` into user and domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)@(.+?)$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// A dot-separated run of words. A word is either an atom of characters
/// outside whitespace, control characters and `()<>@,;:\".[]`, or a quoted
/// string with no embedded quote. The apostrophe is permitted in atoms.
static USER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    const WORD: &str = r#"(?:[^\s\x00-\x1F\x7F()<>@,;:\\".\[\]]+|"[^"]*")"#;
    Regex::new(&format!(r"^{WORD}(?:\.{WORD})*$")).expect("USER_REGEX is a valid regex pattern")
});

static IP_DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*)\]$").expect("IP_DOMAIN_REGEX is a valid regex pattern")
});

static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
        .expect("IPV4_REGEX is a valid regex pattern")
});

/// Validates email addresses against an RFC 822 style grammar.
///
/// Checks run in order and stop at the first failure:
/// 1. surrounding whitespace is trimmed and the empty string rejected
/// 2. every character must be ASCII
/// 3. the address is split at its last `@`
/// 4. an address ending in `.` is rejected
/// 5. the user part must be a dot-separated sequence of words
/// 6. the domain part must be a bracketed IPv4 literal or a valid domain
///    name, see [`DomainValidator`]
///
/// With `allow_local` set, symbolic domains such as `localhost` are
/// accepted as well.
///
/// # Examples
///
/// ```
/// use address_validator::validation::syntax::EmailValidator;
///
/// let validator = EmailValidator::default();
/// assert!(validator.is_valid("jsmith@apache.org"));
/// assert!(validator.is_valid("someone@[216.109.118.76]"));
/// assert!(!validator.is_valid("joe@localhost"));
///
/// assert!(EmailValidator::new(true).is_valid("joe@localhost"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator {
    domain_validator: DomainValidator,
}

impl EmailValidator {
    pub fn new(allow_local: bool) -> Self {
        Self {
            domain_validator: DomainValidator::new(allow_local),
        }
    }

    pub fn allow_local(&self) -> bool {
        self.domain_validator.allow_local()
    }

    pub fn is_valid(&self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            return false;
        }

        if !email.is_ascii() {
            trace!(email, "address contains non-ASCII characters");
            return false;
        }

        let Some(captures) = EMAIL_REGEX.captures(email) else {
            trace!(email, "address has no user/domain separator");
            return false;
        };

        if email.ends_with('.') {
            trace!(email, "address ends with a dot");
            return false;
        }

        let user = &captures[1];
        if !is_valid_user(user) {
            trace!(email, user, "invalid user part");
            return false;
        }

        let domain = &captures[2];
        if !self.is_valid_domain(domain) {
            trace!(email, domain, "invalid domain part");
            return false;
        }

        true
    }

    fn is_valid_domain(&self, domain: &str) -> bool {
        match IP_DOMAIN_REGEX.captures(domain) {
            Some(captures) => is_valid_inet4_address(&captures[1]),
            None => self.domain_validator.is_valid(domain),
        }
    }
}

/// Validates `email` with the default, non-local [`EmailValidator`].
///
/// # Examples
/// ```
/// use address_validator::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("andy.o'reilly@data-workshop.com"));
/// assert!(!is_valid_email("joe..ok@apache.org"));
/// assert!(!is_valid_email("someone@[111.222.333.44444]"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EmailValidator::default().is_valid(email)
}

fn is_valid_user(user: &str) -> bool {
    USER_REGEX.is_match(user)
}

/// Four dot-separated groups of one to three digits, each at most 255.
/// Leading zeros are allowed.
fn is_valid_inet4_address(address: &str) -> bool {
    let Some(captures) = IPV4_REGEX.captures(address) else {
        return false;
    };

    captures
        .iter()
        .skip(1)
        .all(|segment| match segment.map(|m| m.as_str().parse::<u16>()) {
            Some(Ok(octet)) => octet <= 255,
            _ => false,
        })
}

#[cfg(test)]
#[path = "syntax_test.rs"]
mod syntax_test;
