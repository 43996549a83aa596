//! Per-category rewrites of a single matched substring.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::category::{Category, Direction, IndicatorKind};

/// Marker strings that only appear in defanged text.
pub const DOT_MARKER: &str = "[.]";
pub const AT_MARKER: &str = "[@]";
pub const SCHEME_MARKER: &str = "hxxp";

static RE_HXXP: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)hxxp"#).expect("valid hxxp regex"));

// Swap the middle `tt`/`xx` of a four letter scheme token, keeping letter case.
fn swap_scheme_letters(token: &str, to_x: bool) -> String {
    token
        .chars()
        .enumerate()
        .map(|(i, c)| match (i, c, to_x) {
            (1 | 2, 't', true) => 'x',
            (1 | 2, 'T', true) => 'X',
            (1 | 2, 'x', false) => 't',
            (1 | 2, 'X', false) => 'T',
            _ => c,
        })
        .collect()
}

fn defang_url(url: &str) -> String {
    let with_scheme = match url.get(..4) {
        Some(head) if head.eq_ignore_ascii_case("http") => {
            let mut out = swap_scheme_letters(head, true);
            out.push_str(&url[4..]);
            out
        }
        _ => url.to_string(),
    };
    with_scheme.replace('.', DOT_MARKER)
}

/// True when `s` already carries a defang marker (`[.]`, `[@]`, or `hxxp` in any case).
pub fn is_defanged(s: &str) -> bool {
    s.contains(DOT_MARKER)
        || s.contains(AT_MARKER)
        || s.as_bytes()
            .windows(SCHEME_MARKER.len())
            .any(|w| w.eq_ignore_ascii_case(SCHEME_MARKER.as_bytes()))
}

/// Defang one matched substring of the given category.
///
/// Refang-direction categories are returned unchanged.
pub fn defang(category: Category, matched: &str) -> String {
    if category.direction() != Direction::Defang {
        return matched.to_string();
    }
    match category.kind() {
        IndicatorKind::Url => defang_url(matched),
        IndicatorKind::Email => matched.replace('@', AT_MARKER).replace('.', DOT_MARKER),
        IndicatorKind::Ip | IndicatorKind::Domain => matched.replace('.', DOT_MARKER),
    }
}

/// Restore every defang marker in a matched substring.
pub fn refang(matched: &str) -> String {
    let schemes = RE_HXXP.replace_all(matched, |caps: &Captures| {
        swap_scheme_letters(&caps[0], false)
    });
    schemes.replace(DOT_MARKER, ".").replace(AT_MARKER, "@")
}
