use std::path::Path;

use crate::extractor::{TextExtractor, extension};

/// Reads plain text and markup files verbatim
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn can_handle(&self, path: &Path) -> bool {
        matches!(extension(path).as_deref(), Some("txt" | "md"))
    }

    fn extract(&self, path: &Path) -> anyhow::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(decode_lossy(&bytes))
    }
}

/// Decode UTF-8, dropping invalid byte sequences instead of failing
pub fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes
            .utf8_chunks()
            .map(|chunk| chunk.valid())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_text_and_markdown_only() {
        assert!(PlainTextExtractor.can_handle(Path::new("a/project-sow.TXT")));
        assert!(PlainTextExtractor.can_handle(Path::new("summary.md")));
        assert!(!PlainTextExtractor.can_handle(Path::new("resume.pdf")));
        assert!(!PlainTextExtractor.can_handle(Path::new("Makefile")));
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"SIEM \xff\xfe rollout \xc3\xa9t\xc3";
        assert_eq!(decode_lossy(bytes), "SIEM  rollout \u{e9}t");
    }

    #[test]
    fn test_valid_utf8_untouched() {
        assert_eq!(decode_lossy("caf\u{e9} \u{fffd}".as_bytes()), "caf\u{e9} \u{fffd}");
    }
}
