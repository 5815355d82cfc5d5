// Paragraph extraction: blank-line-separated blocks for unnumbered documents
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ExtractedItem, ItemKind};
use std::collections::HashSet;

use crate::patterns::matches_year_token;

/// Paragraphs shorter than this (in chars) are noise, never returned
pub const MIN_PARAGRAPH_LEN: usize = 20;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

pub fn scan(text: &str, seen: &mut HashSet<String>) -> Vec<ExtractedItem> {
    let mut items = Vec::new();

    for block in PARAGRAPH_BREAK.split(text) {
        let paragraph = block.trim();
        if paragraph.chars().count() < MIN_PARAGRAPH_LEN {
            continue;
        }
        if !matches_year_token(paragraph) {
            continue;
        }
        if seen.insert(paragraph.to_string()) {
            items.push(ExtractedItem {
                kind: ItemKind::Paragraph,
                content: paragraph.to_string(),
            });
        }
    }

    items
}
