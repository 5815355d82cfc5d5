//! Last-resort raw byte scan
//!
//! No structural awareness: byte regexes pick out runs that look like
//! encoded Hangul text, first as UTF-8 mixed with ASCII, then as UTF-16LE
//! code units. Used when every container-aware extractor has failed.

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    // Runs of UTF-8 Hangul-range sequences mixed with printable ASCII
    static ref UTF8_HANGUL_RUN: Regex =
        Regex::new(r"(?-u)(?:[\xEA-\xED][\x80-\xBF][\x80-\xBF]|[ -~]){24,}").unwrap();
    // UTF-16LE Hangul syllables: high byte in the 0xAC..=0xD7 block
    static ref UTF16LE_HANGUL_RUN: Regex =
        Regex::new(r"(?s-u)(?:.[\xAC-\xD7]){4,}").unwrap();
}

/// Minimum Hangul chars for a UTF-8 run to count as text rather than noise
const MIN_HANGUL_IN_RUN: usize = 2;

pub fn extract(bytes: &[u8]) -> Option<String> {
    let mut out = String::new();

    for found in UTF8_HANGUL_RUN.find_iter(bytes) {
        if let Ok(run) = std::str::from_utf8(found.as_bytes()) {
            if run.chars().filter(|c| is_hangul(*c)).count() >= MIN_HANGUL_IN_RUN {
                out.push_str(run.trim());
                out.push('\n');
            }
        }
    }

    if out.is_empty() {
        for found in UTF16LE_HANGUL_RUN.find_iter(bytes) {
            let units: Vec<u16> = found
                .as_bytes()
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            if let Ok(run) = String::from_utf16(&units) {
                out.push_str(run.trim());
                out.push('\n');
            }
        }
    }

    let trimmed = out.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_hangul(c: char) -> bool {
    ('\u{ac00}'..='\u{d7a3}').contains(&c)
}
