pub mod types;

pub use types::{ExtractedItem, ItemKind, ScanReport, ScanStats};
