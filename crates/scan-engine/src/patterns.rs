//! Year-token patterns for passage matching
//!
//! The literal spellings and their order are behavior-defining; matching is
//! case-insensitive substring search across the whole list. Coincidental
//! substring hits are accepted, there is no semantic disambiguation.

use lazy_static::lazy_static;
use regex::Regex;

/// Year-reference spellings, including the full-width digit variant
pub const YEAR_PATTERNS: &[&str] = &[
    r"24년",
    r"2024년",
    r"24학년도",
    r"24년도",
    r"'24",
    r"2024학년도",
    r"２４년",
    r"24학년",
    r"2024-",
    r"24-",
    r"2024\.",
    r"24\.",
];

lazy_static! {
    static ref COMPILED: Vec<Regex> = YEAR_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){pattern}")).unwrap())
        .collect();
}

/// True if any year pattern matches anywhere in the text
pub fn matches_year_token(text: &str) -> bool {
    COMPILED.iter().any(|re| re.is_match(text))
}
