//! Registry of recognized top-level domains.
//!
//! The registry is split into four disjoint categories: infrastructure,
//! generic, country-code and local. The first three are what an ordinary
//! domain may end in; the local pseudo-TLDs are only honoured when a caller
//! explicitly opts in.
//!
//! All lookups lowercase their input and ignore a single leading dot, so
//! `".COM"`, `"com"` and `"Com"` are the same TLD.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

const INFRASTRUCTURE_TLDS: &[&str] = &[
    "arpa", // internet infrastructure
    "root", // diagnostic marker for non-truncated root zone
];

const GENERIC_TLDS: &[&str] = &[
    "aero", "asia", "biz", "cat", "com", "coop", "info", "jobs", "mobi", "museum", "name", "net",
    "org", "pro", "tel", "travel", "gov", "edu", "mil", "int",
];

// Includes a few retired codes (an, su, tp, yu) that are still seen in the wild.
const COUNTRY_CODE_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au",
    "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo",
    "br", "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck",
    "cl", "cm", "cn", "co", "cr", "cu", "cv", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do",
    "dz", "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga",
    "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt",
    "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io",
    "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp",
    "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly",
    "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms",
    "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no",
    "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr",
    "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se",
    "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "st", "su", "sv", "sy", "sz",
    "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tp", "tr", "tt", "tv",
    "tw", "tz", "ua", "ug", "uk", "um", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn",
    "vu", "wf", "ws", "ye", "yt", "yu", "za", "zm", "zw",
];

const LOCAL_TLDS: &[&str] = &[
    "localhost",   // RFC 2606
    "localdomain", // as in localhost.localdomain
];

static INFRASTRUCTURE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INFRASTRUCTURE_TLDS.iter().copied().collect());
static GENERIC: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GENERIC_TLDS.iter().copied().collect());
static COUNTRY_CODE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COUNTRY_CODE_TLDS.iter().copied().collect());
static LOCAL: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LOCAL_TLDS.iter().copied().collect());

/// The category a recognized top-level domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TldCategory {
    Infrastructure,
    Generic,
    CountryCode,
    Local,
}

impl TldCategory {
    /// Stable lowercase name, used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TldCategory::Infrastructure => "infrastructure",
            TldCategory::Generic => "generic",
            TldCategory::CountryCode => "country_code",
            TldCategory::Local => "local",
        }
    }

    /// Every TLD seeded into this category, lowercase and without a dot.
    pub fn tlds(&self) -> impl Iterator<Item = &'static str> {
        let seed = match self {
            TldCategory::Infrastructure => INFRASTRUCTURE_TLDS,
            TldCategory::Generic => GENERIC_TLDS,
            TldCategory::CountryCode => COUNTRY_CODE_TLDS,
            TldCategory::Local => LOCAL_TLDS,
        };
        seed.iter().copied()
    }

    fn entries(&self) -> &'static HashSet<&'static str> {
        match self {
            TldCategory::Infrastructure => &INFRASTRUCTURE,
            TldCategory::Generic => &GENERIC,
            TldCategory::CountryCode => &COUNTRY_CODE,
            TldCategory::Local => &LOCAL,
        }
    }

    fn contains(&self, tld: &str) -> bool {
        self.entries().contains(normalize(tld).as_str())
    }
}

impl fmt::Display for TldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(tld: &str) -> String {
    let tld = tld.strip_prefix('.').unwrap_or(tld);
    tld.to_ascii_lowercase()
}

/// Returns `true` if `tld` is an infrastructure, generic or country-code TLD.
///
/// Local TLDs are not included, see [`is_valid_tld_with`].
pub fn is_valid_tld(tld: &str) -> bool {
    is_valid_tld_with(tld, false)
}

/// Like [`is_valid_tld`], additionally accepting local TLDs when
/// `allow_local` is set.
pub fn is_valid_tld_with(tld: &str, allow_local: bool) -> bool {
    (allow_local && is_valid_local_tld(tld))
        || is_valid_infrastructure_tld(tld)
        || is_valid_generic_tld(tld)
        || is_valid_country_code_tld(tld)
}

pub fn is_valid_infrastructure_tld(tld: &str) -> bool {
    TldCategory::Infrastructure.contains(tld)
}

pub fn is_valid_generic_tld(tld: &str) -> bool {
    TldCategory::Generic.contains(tld)
}

pub fn is_valid_country_code_tld(tld: &str) -> bool {
    TldCategory::CountryCode.contains(tld)
}

/// Returns `true` for the widely used local pseudo-TLDs `localhost` and
/// `localdomain`.
pub fn is_valid_local_tld(tld: &str) -> bool {
    TldCategory::Local.contains(tld)
}

/// Looks up which category `tld` belongs to, if any.
pub fn category_of(tld: &str) -> Option<TldCategory> {
    let tld = normalize(tld);
    [
        TldCategory::Infrastructure,
        TldCategory::Generic,
        TldCategory::CountryCode,
        TldCategory::Local,
    ]
    .into_iter()
    .find(|category| category.entries().contains(tld.as_str()))
}
