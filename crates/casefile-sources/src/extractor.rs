//! Text extraction trait and registry

use std::path::Path;

use crate::document::DocumentPlaceholder;
use crate::text::PlainTextExtractor;

/// Trait for turning a file on disk into text
pub trait TextExtractor: Send + Sync {
    /// Check if this extractor handles the given file
    fn can_handle(&self, path: &Path) -> bool;

    /// Extract the file's text
    fn extract(&self, path: &Path) -> anyhow::Result<String>;
}

/// Ordered set of extractors. The first one that can handle a path wins.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Plain text and markup are read verbatim, word-processor and PDF files
    /// yield a placeholder.
    pub fn new() -> Self {
        Self {
            extractors: vec![Box::new(PlainTextExtractor), Box::new(DocumentPlaceholder)],
        }
    }

    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Register an extractor ahead of the existing ones
    pub fn register(&mut self, extractor: Box<dyn TextExtractor>) {
        self.extractors.insert(0, extractor);
    }

    /// Extract text from `path`. Never fails: unsupported formats and read
    /// errors produce a bracketed placeholder naming the problem.
    pub fn extract_text(&self, path: &Path) -> String {
        let name = display_name(path);

        let Some(extractor) = self.extractors.iter().find(|e| e.can_handle(path)) else {
            let suffix = extension(path)
                .map(|e| format!(".{}", e))
                .unwrap_or_else(|| "(none)".to_string());
            tracing::debug!("Unsupported file type for {}", path.display());
            return format!("[Unsupported file type: {}]", suffix);
        };

        match extractor.extract(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                format!("[Error reading {}: {}]", name, e)
            }
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased extension without the dot
pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
