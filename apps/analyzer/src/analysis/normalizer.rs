//! Text Normalizer: lowercase, alphanumeric-only, single-spaced text.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    line_breaks: Regex,
    disallowed: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        line_breaks: Regex::new(r"[\r\n]+").expect("static regex"),
        disallowed: Regex::new(r"[^a-z0-9\s]").expect("static regex"),
        whitespace: Regex::new(r"\s+").expect("static regex"),
    })
}

/// Normalizes raw document text. Absent input normalizes to the empty string.
pub fn normalize(raw: Option<&str>) -> String {
    let lowered = raw.unwrap_or_default().to_lowercase();
    if lowered.is_empty() {
        return lowered;
    }

    let p = patterns();
    let joined = p.line_breaks.replace_all(&lowered, " ");
    let stripped = p.disallowed.replace_all(&joined, "");
    let collapsed = p.whitespace.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Whitespace-split token count of normalized text.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}
