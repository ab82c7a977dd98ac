use std::path::Path;

use crate::extractor::{TextExtractor, display_name, extension};

/// Stands in for PDF and Word parsing, which needs a dedicated document
/// library. Register a real extractor ahead of this one to replace it.
pub struct DocumentPlaceholder;

impl TextExtractor for DocumentPlaceholder {
    fn can_handle(&self, path: &Path) -> bool {
        matches!(extension(path).as_deref(), Some("pdf" | "doc" | "docx"))
    }

    fn extract(&self, path: &Path) -> anyhow::Result<String> {
        let name = display_name(path);
        tracing::debug!("No parser for {}, using placeholder", path.display());

        let text = match extension(path).as_deref() {
            Some("pdf") => format!(
                "[PDF Content from {} - requires a PDF parser for extraction]",
                name
            ),
            _ => format!(
                "[Word Document Content from {} - requires a Word document parser for extraction]",
                name
            ),
        };
        Ok(text)
    }
}
