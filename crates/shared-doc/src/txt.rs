//! Plain-text extraction with a fixed encoding priority
//!
//! Mirrors the legacy trial order: UTF-8, EUC-KR/CP949, UTF-16, Latin-1.
//! The first decode that succeeds without error and yields non-empty content
//! wins. BOMs are honored ahead of the trial order since they are exact.

use encoding_rs::{Encoding, EUC_KR, UTF_16BE, UTF_16LE, WINDOWS_1252};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

pub fn extract(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    if let Some(text) = decode_by_bom(bytes) {
        return non_empty(text);
    }

    // UTF-16 without BOM must be checked before UTF-8: ASCII stored as
    // UTF-16 is also valid UTF-8 (nulls pass validation)
    if let Some(encoding) = guess_utf16_endianness(bytes) {
        if let Some(text) = decode_strict(encoding, bytes) {
            return non_empty(text);
        }
    }

    // Strict UTF-8
    if let Ok(text) = std::str::from_utf8(bytes) {
        return non_empty(text.to_string());
    }

    // encoding_rs EUC-KR is the windows-949 superset, covering both the
    // cp949 and euc-kr entries of the legacy priority list in one step
    if let Some(text) = decode_strict(EUC_KR, bytes) {
        return non_empty(text);
    }

    // Latin-1 / windows-1252 accepts any byte sequence; terminal fallback
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    non_empty(text.into_owned())
}

fn decode_by_bom(bytes: &[u8]) -> Option<String> {
    if bytes.starts_with(UTF8_BOM) {
        return std::str::from_utf8(&bytes[UTF8_BOM.len()..])
            .ok()
            .map(str::to_string);
    }
    if bytes.starts_with(UTF16_LE_BOM) {
        return decode_strict(UTF_16LE, &bytes[UTF16_LE_BOM.len()..]);
    }
    if bytes.starts_with(UTF16_BE_BOM) {
        return decode_strict(UTF_16BE, &bytes[UTF16_BE_BOM.len()..]);
    }
    None
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

/// ASCII text stored as UTF-16 shows nulls on every other byte; the side
/// they fall on reveals the byte order.
fn guess_utf16_endianness(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.len() < 4 {
        return None;
    }
    let sample = &bytes[..bytes.len().min(256)];
    let odd_nulls = sample.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    let even_nulls = sample.iter().step_by(2).filter(|&&b| b == 0).count();
    let pairs = sample.len() / 2;

    if odd_nulls * 3 > pairs {
        Some(UTF_16LE)
    } else if even_nulls * 3 > pairs {
        Some(UTF_16BE)
    } else {
        None
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_utf8_passthrough() {
        let input = "2024학년도 모의고사 안내문";
        assert_eq!(extract(input.as_bytes()).unwrap(), input);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("24년도 기출".as_bytes());
        assert_eq!(extract(&bytes).unwrap(), "24년도 기출");
    }

    #[test]
    fn test_euc_kr_decodes() {
        let input = "24년 모의고사 3월 학력평가";
        let (encoded, _, had_errors) = EUC_KR.encode(input);
        assert!(!had_errors);
        assert_eq!(extract(&encoded).unwrap(), input);
    }

    #[test]
    fn test_utf16le_with_bom() {
        let input = "'24 대비 문제";
        let mut bytes = UTF16_LE_BOM.to_vec();
        for unit in input.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(extract(&bytes).unwrap(), input);
    }

    #[test]
    fn test_utf16le_without_bom_via_null_heuristic() {
        let input = "mock exam 2024 edition";
        let bytes: Vec<u8> = input
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        assert_eq!(extract(&bytes).unwrap(), input);
    }

    #[test]
    fn test_empty_and_whitespace_fail() {
        assert!(extract(b"").is_none());
        assert!(extract(b"   \n\t  ").is_none());
    }
}
