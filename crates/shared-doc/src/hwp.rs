//! Best-effort text extraction from the legacy compound-binary format
//!
//! The container is an OLE compound document. The `PrvText` stream holds a
//! plain UTF-16LE preview of the whole document and is preferred when
//! present. Otherwise the `BodyText/Section<N>` streams are walked: each is
//! a (usually raw-deflate-compressed) sequence of tagged records; paragraph
//! text records carry UTF-16LE payloads. Records that do not decode are
//! skipped, never fatal.

use std::io::{Cursor, Read};

/// Record tag carrying paragraph text in body-text sections
const TAG_PARA_TEXT: u32 = 67;

/// Upper bound on the `BodyText/Section<N>` walk
const MAX_SECTIONS: usize = 256;

pub fn extract(bytes: &[u8]) -> Option<String> {
    let mut comp = cfb::CompoundFile::open(Cursor::new(bytes)).ok()?;

    if let Some(text) = read_preview(&mut comp) {
        return Some(text);
    }

    read_body_sections(&mut comp)
}

/// Whole-stream UTF-16LE preview text, if the document carries one
fn read_preview(comp: &mut cfb::CompoundFile<Cursor<&[u8]>>) -> Option<String> {
    let mut stream = comp.open_stream("/PrvText").ok()?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).ok()?;
    decode_utf16le(&buf)
}

fn read_body_sections(comp: &mut cfb::CompoundFile<Cursor<&[u8]>>) -> Option<String> {
    let mut text = String::new();

    for index in 0..MAX_SECTIONS {
        let path = format!("/BodyText/Section{index}");
        let mut stream = match comp.open_stream(&path) {
            Ok(stream) => stream,
            Err(_) => break, // sections are contiguous from 0
        };

        let mut buf = Vec::new();
        if stream.read_to_end(&mut buf).is_err() {
            continue;
        }

        let data = inflate_or_raw(buf);
        let section_text = scan_records(&data);
        if !section_text.is_empty() {
            text.push_str(&section_text);
            text.push('\n');
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Body sections are raw-deflate-compressed when the document's compression
/// flag is set; the flag itself is not consulted, a failed inflate just
/// means the stream was stored uncompressed.
fn inflate_or_raw(buf: Vec<u8>) -> Vec<u8> {
    let mut inflated = Vec::new();
    let mut decoder = flate2::read::DeflateDecoder::new(buf.as_slice());
    if decoder.read_to_end(&mut inflated).is_ok() && !inflated.is_empty() {
        inflated
    } else {
        buf
    }
}

/// Walk the tagged-record layout: a 4-byte LE header packs tag (10 bits),
/// level (10 bits), and size (12 bits); size `0xFFF` means an extended
/// 32-bit size follows. Only paragraph-text records are decoded.
fn scan_records(data: &[u8]) -> String {
    let mut out = String::new();
    let mut pos = 0usize;

    while pos + 4 <= data.len() {
        let header = u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]);
        pos += 4;

        let tag = header & 0x3FF;
        let mut size = ((header >> 20) & 0xFFF) as usize;
        if size == 0xFFF {
            if pos + 4 > data.len() {
                break;
            }
            size = u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
                as usize;
            pos += 4;
        }

        if pos + size > data.len() {
            break; // truncated record, stop scanning
        }

        if tag == TAG_PARA_TEXT {
            if let Some(text) = decode_utf16le(&data[pos..pos + size]) {
                out.push_str(&text);
                out.push('\n');
            }
        }

        pos += size;
    }

    out
}

/// Decode a UTF-16LE payload, flattening embedded control words to
/// whitespace. Paragraph text interleaves inline control codes below 0x20;
/// interpreting them structurally is out of scope, so they become separators.
fn decode_utf16le(data: &[u8]) -> Option<String> {
    if data.len() < 2 {
        return None;
    }

    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let cleaned: String = String::from_utf16_lossy(&units)
        .chars()
        .filter(|&c| c != '\u{feff}')
        .map(|c| match c {
            '\r' | '\n' => '\n',
            c if (c as u32) < 0x20 => ' ',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn utf16le_bytes(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    fn record(tag: u32, payload: &[u8]) -> Vec<u8> {
        assert!(payload.len() < 0xFFF);
        let header = tag | ((payload.len() as u32) << 20);
        let mut bytes = header.to_le_bytes().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    fn compound_with_streams(streams: &[(&str, &[u8])]) -> Vec<u8> {
        let cursor = Cursor::new(Vec::new());
        let mut comp = cfb::CompoundFile::create(cursor).unwrap();
        for (path, data) in streams {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if parent != std::path::Path::new("/") {
                    comp.create_storage_all(parent).unwrap();
                }
            }
            let mut stream = comp.create_stream(path).unwrap();
            stream.write_all(data).unwrap();
        }
        comp.into_inner().into_inner()
    }

    #[test]
    fn test_preview_stream_wins() {
        let preview = utf16le_bytes("2024년 대비 모의고사 미리보기 텍스트");
        let bytes = compound_with_streams(&[("/PrvText", &preview)]);
        let text = extract(&bytes).unwrap();
        assert!(text.contains("2024년 대비 모의고사"));
    }

    #[test]
    fn test_body_sections_without_preview() {
        let para = utf16le_bytes("1. 24년 수능 기출 변형 문항");
        let rec = record(TAG_PARA_TEXT, &para);

        let mut compressed = Vec::new();
        let mut encoder =
            flate2::write::DeflateEncoder::new(&mut compressed, flate2::Compression::default());
        encoder.write_all(&rec).unwrap();
        encoder.finish().unwrap();

        let bytes = compound_with_streams(&[("/BodyText/Section0", &compressed)]);
        let text = extract(&bytes).unwrap();
        assert!(text.contains("24년 수능 기출 변형 문항"));
    }

    #[test]
    fn test_uncompressed_body_section() {
        let rec = record(TAG_PARA_TEXT, &utf16le_bytes("무압축 본문 2024학년도 평가"));
        let bytes = compound_with_streams(&[("/BodyText/Section0", &rec)]);
        assert!(extract(&bytes).unwrap().contains("2024학년도 평가"));
    }

    #[test]
    fn test_unknown_records_are_skipped() {
        let mut data = record(16, &[0xAA; 12]); // arbitrary non-text record
        data.extend(record(TAG_PARA_TEXT, &utf16le_bytes("본문 '24 대비 자료")));
        data.extend(record(300, &[0x01, 0x02]));
        let bytes = compound_with_streams(&[("/BodyText/Section0", &data)]);
        let text = extract(&bytes).unwrap();
        assert!(text.contains("'24 대비 자료"));
    }

    #[test]
    fn test_control_codes_become_separators() {
        let mut units: Vec<u16> = "앞쪽".encode_utf16().collect();
        units.push(0x0001); // inline control word
        units.extend("뒤쪽 2024년".encode_utf16());
        let payload: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
        let decoded = decode_utf16le(&payload).unwrap();
        assert_eq!(decoded, "앞쪽 뒤쪽 2024년");
    }

    #[test]
    fn test_truncated_record_stops_cleanly() {
        // Header claims more payload than the stream holds
        let header = (TAG_PARA_TEXT | (200u32 << 20)).to_le_bytes().to_vec();
        let bytes = compound_with_streams(&[("/BodyText/Section0", &header)]);
        assert!(extract(&bytes).is_none());
    }

    #[test]
    fn test_not_a_compound_file() {
        assert!(extract(b"plain text, not OLE").is_none());
    }
}
