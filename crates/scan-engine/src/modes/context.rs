// Context-window extraction: the last-resort line scan
use shared_types::{ExtractedItem, ItemKind};
use std::collections::HashSet;

use crate::patterns::matches_year_token;

/// Non-blank lines captured before a hit
pub const LINES_BEFORE: usize = 2;
/// Lines captured after a hit (window end is exclusive at hit + 1 + LINES_AFTER)
pub const LINES_AFTER: usize = 5;
/// Windows at or under this length (in chars) are discarded
pub const MIN_CONTEXT_LEN: usize = 30;

/// Scan line by line; on a pattern hit capture the surrounding window with
/// blank lines dropped, then resume past the window so captures never overlap.
pub fn scan(text: &str, seen: &mut HashSet<String>) -> Vec<ExtractedItem> {
    let lines: Vec<&str> = text.lines().collect();
    let mut items = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        if !matches_year_token(line) {
            i += 1;
            continue;
        }

        let start = i.saturating_sub(LINES_BEFORE);
        let end = (i + 1 + LINES_AFTER).min(lines.len());

        let window: Vec<&str> = lines[start..end]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        let context = window.join("\n");

        if context.chars().count() > MIN_CONTEXT_LEN && seen.insert(context.clone()) {
            items.push(ExtractedItem {
                kind: ItemKind::Context,
                content: context,
            });
        }

        i = end;
    }

    items
}
