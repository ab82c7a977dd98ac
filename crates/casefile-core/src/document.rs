//! Discovered documents and their categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Content category assigned from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sow,
    ExecutiveSummary,
    Resume,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sow => "sow",
            Category::ExecutiveSummary => "executive_summary",
            Category::Resume => "resume",
            Category::Unknown => "unknown",
        }
    }

    /// Whether files of this category feed record building
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file found during traversal, with its extracted text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub category: Category,
    /// Extracted content, or a bracketed placeholder when extraction is unsupported or failed
    pub raw_text: String,
}

impl ClassifiedFile {
    pub fn new(path: PathBuf, category: Category, raw_text: String) -> Self {
        Self {
            path,
            category,
            raw_text,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::ExecutiveSummary).unwrap();
        assert_eq!(json, "\"executive_summary\"");
        assert_eq!(Category::Sow.to_string(), "sow");
    }

    #[test]
    fn test_unknown_is_not_known() {
        assert!(Category::Resume.is_known());
        assert!(!Category::Unknown.is_known());
    }
}
