//! Precompiled detection patterns for fanged and defanged indicators.
//!
//! Patterns only recognize lexical shape; nothing here checks that an
//! address is routable or that a top-level label exists. Digit classes are
//! spelled `[0-9]` so only ASCII digits form IPv4 groups.

use once_cell::sync::Lazy;
use regex::Regex;

use super::category::{Category, Direction};

// Fanged forms (defang direction)
pub static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhttps?://[^\s/$.?#].[^\s]*"#).expect("valid URL regex")
});
pub static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}\b"#).expect("valid email regex")
});
pub static RE_IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b"#).expect("valid ipv4 regex"));
// Intentionally also matches the host part of URLs and emails.
pub static RE_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b[a-z0-9.\-]+\.[a-z]{2,}\b"#).expect("valid domain regex")
});

// Defanged forms (refang direction)
pub static RE_DEFANGED_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhxxps?://[^\s/$.?#].[^\s]*"#).expect("valid defanged URL regex")
});
pub static RE_DEFANGED_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(?:[a-z0-9_%+\-]|\.|\[\.\])+\[@\](?:[a-z0-9\-]|\.|\[\.\])+(?:\.|\[\.\])[a-z]{2,}\b"#,
    )
    .expect("valid defanged email regex")
});
pub static RE_DEFANGED_IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:[0-9]{1,3}\[\.\]){3}[0-9]{1,3}\b"#).expect("valid defanged ipv4 regex")
});
// At least the last separator must be a literal `[.]`; earlier ones may be either form.
pub static RE_DEFANGED_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b[a-z0-9\-]+(?:(?:\.|\[\.\])[a-z0-9\-]+)*\[\.\][a-z]{2,}\b"#)
        .expect("valid defanged domain regex")
});

/// Detection pattern for a category.
pub fn pattern_for(category: Category) -> &'static Regex {
    match category {
        Category::Url => &RE_URL,
        Category::Email => &RE_EMAIL,
        Category::Ip => &RE_IPV4,
        Category::Domain => &RE_DOMAIN,
        Category::DefangedUrl => &RE_DEFANGED_URL,
        Category::DefangedEmail => &RE_DEFANGED_EMAIL,
        Category::DefangedIp => &RE_DEFANGED_IPV4,
        Category::DefangedDomain => &RE_DEFANGED_DOMAIN,
    }
}

/// Ordered (category, pattern) table for one direction.
pub fn registry(direction: Direction) -> impl Iterator<Item = (Category, &'static Regex)> {
    direction
        .categories()
        .iter()
        .map(|&category| (category, pattern_for(category)))
}
