//! Document text extraction for the upload pipeline
//!
//! Classifies raw file bytes by container signature and runs a fixed-priority
//! cascade of extractors until one produces usable text. Extractors never
//! panic past their boundary; each returns `Some(text)` or `None` and the
//! cascade falls through to the next strategy.

pub mod hwp;
pub mod hwpx;
pub mod raw;
pub mod sniff;
pub mod txt;

use sniff::DocFormat;
use thiserror::Error;

/// Minimum trimmed length (in chars) for an extraction to count as a success
pub const MIN_TEXT_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no extraction strategy produced usable text")]
    NoText,
}

/// Text pulled out of an uploaded document, tagged with the winning strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub method: &'static str,
}

type Extractor = fn(&[u8]) -> Option<String>;

/// Extract human-readable text from raw file bytes.
///
/// The sniffed container format decides the strategy order; the raw byte
/// scan always runs last. The first strategy whose output clears
/// [`MIN_TEXT_LEN`] wins. Misclassified input makes the wrong extractor
/// return `None`, which the cascade absorbs.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    let chain: &[(&'static str, Extractor)] = match sniff::detect(bytes) {
        DocFormat::CompoundBinary => &[("hwp", hwp::extract), ("raw", raw::extract)],
        DocFormat::ZipContainer => &[("hwpx", hwpx::extract), ("raw", raw::extract)],
        DocFormat::PlainText => &[("txt", txt::extract), ("raw", raw::extract)],
    };

    chain
        .iter()
        .find_map(|&(method, extract)| {
            extract(bytes)
                .filter(|text| text.trim().chars().count() >= MIN_TEXT_LEN)
                .map(|text| ExtractedText { text, method })
        })
        .ok_or(ExtractError::NoText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8_goes_through_txt() {
        let input = "2024년 수능 대비 모의고사 1회차 문제지입니다.";
        let extracted = extract_text(input.as_bytes()).unwrap();
        assert_eq!(extracted.method, "txt");
        assert_eq!(extracted.text, input);
    }

    #[test]
    fn test_short_text_is_rejected() {
        let result = extract_text("24년".as_bytes());
        assert!(matches!(result, Err(ExtractError::NoText)));
    }

    #[test]
    fn test_corrupt_zip_falls_through() {
        // Zip signature over junk: hwpx extraction fails, raw scan finds
        // nothing readable.
        let mut bytes = sniff::ZIP_MAGIC.to_vec();
        bytes.extend_from_slice(&[0u8; 128]);
        assert!(matches!(extract_text(&bytes), Err(ExtractError::NoText)));
    }

    #[test]
    fn test_truncated_compound_header_falls_through() {
        // Valid CFB magic but nothing behind it: hwp extractor fails,
        // raw scan finds nothing, pipeline reports failure instead of panicking.
        let mut bytes = sniff::CFB_MAGIC.to_vec();
        bytes.extend_from_slice(&[0u8; 64]);
        assert!(matches!(extract_text(&bytes), Err(ExtractError::NoText)));
    }
}
