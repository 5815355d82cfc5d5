//! Container-format detection from leading byte signatures
//!
//! A signature check only, not a validator. A malformed file that happens to
//! carry a container magic is classified by that magic and left for the
//! extractor to reject.

/// CFB (Compound File Binary) / OLE2 magic signature.
///
/// The legacy word-processor binary format is an OLE compound document and
/// starts with these 8 bytes.
pub const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Zip local-file-header magic; the modern container is a zip of XML parts.
pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    PlainText,
    CompoundBinary,
    ZipContainer,
}

/// Classify raw bytes by container signature; anything unrecognized is
/// treated as delimited plain text.
pub fn detect(bytes: &[u8]) -> DocFormat {
    if bytes.len() >= CFB_MAGIC.len() && bytes[..CFB_MAGIC.len()] == CFB_MAGIC {
        return DocFormat::CompoundBinary;
    }
    if bytes.len() >= ZIP_MAGIC.len() && bytes[..ZIP_MAGIC.len()] == ZIP_MAGIC {
        return DocFormat::ZipContainer;
    }
    DocFormat::PlainText
}
