// Numbered-item extraction: items anchored on "N." / "N)" / "문제 N."
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ExtractedItem, ItemKind};
use std::collections::HashSet;

use crate::patterns::matches_year_token;

lazy_static! {
    static ref ITEM_ANCHOR: Regex = Regex::new(r"^\s*(?:문제\s*)?\d+[.)]").unwrap();
}

/// Split text into numbered items and keep those matching a year pattern.
/// An item runs from its anchor line through the following non-blank,
/// non-anchor lines; a blank line closes it.
pub fn scan(text: &str, seen: &mut HashSet<String>) -> Vec<ExtractedItem> {
    let mut items = Vec::new();

    for candidate in split_items(text) {
        if !matches_year_token(&candidate) {
            continue;
        }
        if seen.insert(candidate.clone()) {
            items.push(ExtractedItem {
                kind: ItemKind::Numbered,
                content: candidate,
            });
        }
    }

    items
}

fn split_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if ITEM_ANCHOR.is_match(line) {
            if let Some(item) = current.take() {
                items.push(item);
            }
            current = Some(line.trim().to_string());
        } else if line.trim().is_empty() {
            if let Some(item) = current.take() {
                items.push(item);
            }
        } else if let Some(item) = current.as_mut() {
            item.push('\n');
            item.push_str(line.trim_end());
        }
    }

    if let Some(item) = current.take() {
        items.push(item);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_fresh(text: &str) -> Vec<ExtractedItem> {
        let mut seen = HashSet::new();
        scan(text, &mut seen)
    }

    #[test]
    fn test_keeps_matching_item_only() {
        let items = scan_fresh("1. foo 24년 bar\n2. baz");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::Numbered);
        assert_eq!(items[0].content, "1. foo 24년 bar");
    }

    #[test]
    fn test_continuation_lines_attach_to_item() {
        let text = "1. 다음 글을 읽고 물음에 답하시오\n2024학년도 수능 연계 지문입니다\n2. 별개 문항";
        let items = scan_fresh(text);
        assert_eq!(items.len(), 1);
        assert!(items[0].content.contains("다음 글을 읽고"));
        assert!(items[0].content.contains("2024학년도"));
        assert!(!items[0].content.contains("별개 문항"));
    }

    #[test]
    fn test_item_marker_word_prefix() {
        let items = scan_fresh("문제 3) 24년도 출제 범위를 고르시오");
        assert_eq!(items.len(), 1);
        assert!(items[0].content.starts_with("문제 3)"));
    }

    #[test]
    fn test_blank_line_closes_item() {
        let text = "1. 24년 첫 문항\n\n덧붙은 설명은 항목이 아님 24년";
        let items = scan_fresh(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "1. 24년 첫 문항");
    }

    #[test]
    fn test_exact_duplicates_are_suppressed() {
        let text = "1. 24년 중복 문항\n\n1. 24년 중복 문항";
        let items = scan_fresh(text);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_no_numbered_items_yields_empty() {
        assert!(scan_fresh("번호 없는 24년 문장입니다").is_empty());
    }
}
