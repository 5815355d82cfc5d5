//! Plain-text report rendering
//!
//! Fixed banner format: header block, source filename, item count, then one
//! section per non-empty kind group in numbered → paragraph → context order.
//! A scan with no matches renders the fixed not-found message with
//! troubleshooting hints, never an empty file.

use shared_types::{ExtractedItem, ItemKind, ScanReport};
use std::fmt::Write;

const BANNER_WIDTH: usize = 70;
const ITEM_DIVIDER_WIDTH: usize = 50;

pub fn render(report: &ScanReport) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "24년 모의고사 문제 추출 결과");
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out);
    let _ = writeln!(out, "원본 파일: {}", report.source_filename);
    let _ = writeln!(out, "추출된 항목: {}개", report.items.len());
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out);

    if report.items.is_empty() {
        out.push_str(NOT_FOUND_MESSAGE);
        return out;
    }

    let numbered = items_of(report, ItemKind::Numbered);
    let paragraphs = items_of(report, ItemKind::Paragraph);
    let contexts = items_of(report, ItemKind::Context);

    if !numbered.is_empty() {
        write_group_header(&mut out, "[ 번호가 있는 문제 ]");
        for item in &numbered {
            write_item(&mut out, None, &item.content);
        }
    }

    if !paragraphs.is_empty() {
        if !numbered.is_empty() {
            out.push_str("\n\n");
        }
        write_group_header(&mut out, "[ 문단 형식 문제 ]");
        for (i, item) in paragraphs.iter().enumerate() {
            write_item(&mut out, Some(format!("[{}]", i + 1)), &item.content);
        }
    }

    if !contexts.is_empty() {
        if !numbered.is_empty() || !paragraphs.is_empty() {
            out.push_str("\n\n");
        }
        write_group_header(&mut out, "[ 문맥 기반 추출 ]");
        for (i, item) in contexts.iter().enumerate() {
            write_item(&mut out, Some(format!("[추출 {}]", i + 1)), &item.content);
        }
    }

    out
}

pub const NOT_FOUND_MESSAGE: &str = "24년 관련 내용을 찾을 수 없습니다.\n\n확인사항:\n- 파일에 '24년', '2024년', '24학년도' 등의 키워드가 포함되어 있나요?\n- 텍스트 인코딩이 올바른가요?\n- 한글 프로그램에서 TXT로 저장할 때 '텍스트 문서' 형식을 선택했나요?\n";

fn items_of(report: &ScanReport, kind: ItemKind) -> Vec<&ExtractedItem> {
    report.items.iter().filter(|item| item.kind == kind).collect()
}

fn write_group_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(BANNER_WIDTH));
    let _ = writeln!(out);
}

fn write_item(out: &mut String, label: Option<String>, content: &str) {
    if let Some(label) = label {
        let _ = writeln!(out, "{label}");
    }
    out.push_str(content);
    let _ = write!(out, "\n\n{}\n\n", "-".repeat(ITEM_DIVIDER_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ScanReport;

    fn item(kind: ItemKind, content: &str) -> ExtractedItem {
        ExtractedItem {
            kind,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_banner_and_counts() {
        let report = ScanReport::new(
            "mock.txt",
            vec![item(ItemKind::Numbered, "1. 24년 문항")],
        );
        let text = render(&report);
        assert!(text.starts_with(&"=".repeat(70)));
        assert!(text.contains("24년 모의고사 문제 추출 결과"));
        assert!(text.contains("원본 파일: mock.txt"));
        assert!(text.contains("추출된 항목: 1개"));
    }

    #[test]
    fn test_groups_appear_in_fixed_order() {
        let report = ScanReport::new(
            "mock.txt",
            vec![
                item(ItemKind::Context, "문맥 추출 내용"),
                item(ItemKind::Numbered, "1. 24년 문항"),
                item(ItemKind::Paragraph, "문단 형식 내용"),
            ],
        );
        let text = render(&report);
        let numbered = text.find("[ 번호가 있는 문제 ]").unwrap();
        let paragraph = text.find("[ 문단 형식 문제 ]").unwrap();
        let context = text.find("[ 문맥 기반 추출 ]").unwrap();
        assert!(numbered < paragraph);
        assert!(paragraph < context);
        assert!(text.contains("[1]\n문단 형식 내용"));
        assert!(text.contains("[추출 1]\n문맥 추출 내용"));
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let report = ScanReport::new("mock.txt", vec![item(ItemKind::Context, "문맥")]);
        let text = render(&report);
        assert!(!text.contains("[ 번호가 있는 문제 ]"));
        assert!(!text.contains("[ 문단 형식 문제 ]"));
        assert!(text.contains("[ 문맥 기반 추출 ]"));
    }

    #[test]
    fn test_no_matches_renders_hints_not_empty() {
        let report = ScanReport::new("empty.txt", vec![]);
        let text = render(&report);
        assert!(text.contains("24년 관련 내용을 찾을 수 없습니다."));
        assert!(text.contains("확인사항:"));
        assert!(text.contains("추출된 항목: 0개"));
        assert!(!text.trim().is_empty());
    }
}
