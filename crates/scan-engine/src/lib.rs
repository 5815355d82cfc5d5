pub mod modes;
pub mod patterns;
pub mod report;

use shared_types::{ExtractedItem, ScanReport};
use std::collections::HashSet;

/// ScanEngine entry point
///
/// Runs the three extraction modes in fixed priority order — numbered items,
/// then paragraphs, then context windows — stopping at the first mode that
/// yields any match. Deterministic for identical input; exact-text duplicates
/// are suppressed within one run.
pub struct ScanEngine;

impl ScanEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_text(&self, text: &str) -> Vec<ExtractedItem> {
        let mut seen = HashSet::new();

        let items = modes::numbered::scan(text, &mut seen);
        if !items.is_empty() {
            return items;
        }

        let items = modes::paragraph::scan(text, &mut seen);
        if !items.is_empty() {
            return items;
        }

        modes::context::scan(text, &mut seen)
    }

    pub fn scan_document(&self, source_filename: &str, text: &str) -> ScanReport {
        ScanReport::new(source_filename, self.scan_text(text))
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}
