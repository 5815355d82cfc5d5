//! Text extraction from the zip-based XML container format
//!
//! Section XML parts live under `Contents/section<N>.xml`. Character data is
//! pulled with a streaming XML reader; if a section fails to parse as XML,
//! a regex scrape of `<hp:t>` text spans recovers what it can.

use lazy_static::lazy_static;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};

lazy_static! {
    static ref TEXT_SPAN: Regex = Regex::new(r"<hp:t[^>]*>([^<]*)</hp:t>").unwrap();
}

pub fn extract(bytes: &[u8]) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).ok()?;

    let mut section_names: Vec<String> = archive
        .file_names()
        .filter(|name| is_section_entry(name))
        .map(String::from)
        .collect();
    section_names.sort();

    let mut text = String::new();
    for name in &section_names {
        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let mut xml = String::new();
        if entry.read_to_string(&mut xml).is_err() {
            continue;
        }

        let section_text = parse_section_xml(&xml).or_else(|| scrape_text_spans(&xml));
        if let Some(section_text) = section_text {
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

fn is_section_entry(name: &str) -> bool {
    name.starts_with("Contents/section") && name.ends_with(".xml")
}

/// Pull character data from `<hp:t>` runs, one line per `<hp:p>` paragraph.
/// Returns `None` on malformed XML so the caller can fall back to scraping.
fn parse_section_xml(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut out = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if local_name_is(e.name().as_ref(), b"t") => {
                in_text_run = true;
            }
            Ok(Event::End(ref e)) if local_name_is(e.name().as_ref(), b"t") => {
                in_text_run = false;
            }
            Ok(Event::End(ref e)) if local_name_is(e.name().as_ref(), b"p") => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Ok(Event::Text(e)) if in_text_run => {
                let chunk = e.unescape().ok()?;
                out.push_str(&chunk);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return None,
        }
        buf.clear();
    }

    Some(out)
}

fn local_name_is(qname: &[u8], local: &[u8]) -> bool {
    match qname.iter().rposition(|&b| b == b':') {
        Some(pos) => &qname[pos + 1..] == local,
        None => qname == local,
    }
}

/// Regex fallback over raw markup for sections that are not well-formed XML
fn scrape_text_spans(xml: &str) -> Option<String> {
    let mut out = String::new();
    for capture in TEXT_SPAN.captures_iter(xml) {
        out.push_str(&unescape_entities(&capture[1]));
        out.push('\n');
    }
    let trimmed = out.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
