//! Email format validation (syntax only, no deliverability checks)

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+",
        r"(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+)*$",
    ))
    .expect("local part pattern is valid")
});

static DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
        r"(?:[A-Za-z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]{0,61}",
        r"[A-Za-z0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])?$",
    ))
    .expect("domain label pattern is valid")
});

/// Whether `email` is a syntactically well-formed address.
///
/// Non-ASCII letters are accepted in the local part and in domain labels.
/// The domain needs at least two labels and a TLD of two or more letters
/// (or a punycode `xn--` TLD).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().count() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().count() > MAX_LOCAL_LEN || !LOCAL_PART.is_match(local) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| DOMAIN_LABEL.is_match(label)) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    (tld.chars().count() >= 2 && tld.chars().all(is_tld_char))
        || (tld.len() > 4 && tld.to_ascii_lowercase().starts_with("xn--"))
}

/// Letters, or characters from the non-ASCII ranges allowed in
/// internationalized labels.
fn is_tld_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{00A0}'..='\u{D7FF}' | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFEF}')
}
