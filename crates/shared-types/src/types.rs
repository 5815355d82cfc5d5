/// Extraction granularity that produced a matched passage
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Numbered,
    Paragraph,
    Context,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Numbered => write!(f, "numbered"),
            ItemKind::Paragraph => write!(f, "paragraph"),
            ItemKind::Context => write!(f, "context"),
        }
    }
}

/// A single matched passage; identity is content equality
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedItem {
    pub kind: ItemKind,
    pub content: String,
}

/// Per-kind match counts reported back to the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScanStats {
    pub total_found: usize,
    pub numbered: usize,
    pub paragraph: usize,
    pub context: usize,
}

impl ScanStats {
    pub fn from_items(items: &[ExtractedItem]) -> Self {
        let mut stats = Self {
            total_found: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.kind {
                ItemKind::Numbered => stats.numbered += 1,
                ItemKind::Paragraph => stats.paragraph += 1,
                ItemKind::Context => stats.context += 1,
            }
        }
        stats
    }
}

/// Result of scanning one uploaded document; write-once
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScanReport {
    pub source_filename: String,
    pub items: Vec<ExtractedItem>,
    pub scanned_at: u64,
}

impl ScanReport {
    pub fn new(source_filename: impl Into<String>, items: Vec<ExtractedItem>) -> Self {
        Self {
            source_filename: source_filename.into(),
            items,
            scanned_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn stats(&self) -> ScanStats {
        ScanStats::from_items(&self.items)
    }
}
