//! Directory traversal and file-name classification

use casefile_core::{Category, CategoryCounts, ClassifiedFile};
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::denylist::Denylist;
use crate::extractor::ExtractorRegistry;

const DOCUMENT_EXTENSIONS: &str = r"\.(?:pdf|doc|docx|txt|md)$";

/// Outcome of scanning one root directory
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub root: PathBuf,
    /// False when the root is missing, not a directory or unreadable
    pub accessible: bool,
    /// Every regular file visited, in traversal order
    pub files: Vec<ClassifiedFile>,
    /// Directories skipped because they could not be read
    pub skipped: Vec<PathBuf>,
}

impl ScanReport {
    fn inaccessible(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            accessible: false,
            ..Default::default()
        }
    }

    pub fn files_in(&self, category: Category) -> impl Iterator<Item = &ClassifiedFile> {
        self.files.iter().filter(move |f| f.category == category)
    }

    pub fn counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for file in &self.files {
            match file.category {
                Category::Sow => counts.sow += 1,
                Category::ExecutiveSummary => counts.executive_summary += 1,
                Category::Resume => counts.resume += 1,
                Category::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    /// Files in one of the known categories
    pub fn known_files(&self) -> usize {
        self.files.iter().filter(|f| f.category.is_known()).count()
    }
}

/// Walks a directory tree and labels files by name
pub struct Classifier {
    groups: Vec<(Category, Vec<Regex>)>,
    denylist: Denylist,
    extractors: ExtractorRegistry,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_parts(Denylist::empty(), ExtractorRegistry::new())
    }

    pub fn with_parts(denylist: Denylist, extractors: ExtractorRegistry) -> Self {
        // Checked in this order; the first matching group wins
        let groups = vec![
            (Category::Sow, compile(&[r".*sow.*", r".*statement.*work.*", r".*proposal.*"])),
            (
                Category::ExecutiveSummary,
                compile(&[
                    r".*executive.*summary.*",
                    r".*delivery.*summary.*",
                    r".*project.*summary.*",
                    r".*completion.*report.*",
                ]),
            ),
            (
                Category::Resume,
                compile(&[r".*resume.*", r".*cv.*", r".*curriculum.*vitae.*"]),
            ),
        ];

        Self {
            groups,
            denylist,
            extractors,
        }
    }

    /// Category for a file name. Matching is case-insensitive.
    pub fn categorize(&self, file_name: &str) -> Category {
        let lower = file_name.to_lowercase();
        self.groups
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(&lower)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Unknown)
    }

    /// Recursively classify every regular file under `root`.
    ///
    /// An inaccessible root yields an empty, non-accessible report. Unreadable
    /// subdirectories are skipped and recorded; siblings are still visited.
    pub fn classify(&self, root: &Path) -> ScanReport {
        if !root.is_dir() || std::fs::read_dir(root).is_err() {
            tracing::warn!("Directory not accessible: {}", root.display());
            return ScanReport::inaccessible(root);
        }

        let mut report = ScanReport {
            root: root.to_path_buf(),
            accessible: true,
            ..Default::default()
        };

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.denied(root, e.path()));

        for entry in walker {
            self.visit(&mut report, entry);
        }

        report
    }

    fn denied(&self, root: &Path, path: &Path) -> bool {
        match self.denylist.matching_pattern_under(root, path) {
            Some(pattern) => {
                tracing::debug!("Denylisted by {}: {}", pattern, path.display());
                true
            }
            None => false,
        }
    }

    /// Fold one walk result into `report`. Walk errors are recorded as skipped
    /// paths and never abort the scan.
    fn visit(&self, report: &mut ScanReport, entry: walkdir::Result<DirEntry>) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                match e.io_error().map(|io| io.kind()) {
                    Some(ErrorKind::PermissionDenied) => {
                        tracing::warn!("Permission denied accessing: {}", path.display());
                    }
                    _ => tracing::warn!("Skipping {}: {}", path.display(), e),
                }
                report.skipped.push(path);
                return;
            }
        };

        if !entry.file_type().is_file() {
            return;
        }

        let file_name = entry.file_name().to_string_lossy();
        let category = self.categorize(&file_name);
        let raw_text = self.extractors.extract_text(entry.path());

        tracing::debug!("{} -> {}", entry.path().display(), category);
        report.files.push(ClassifiedFile::new(
            entry.path().to_path_buf(),
            category,
            raw_text,
        ));
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(stems: &[&str]) -> Vec<Regex> {
    stems
        .iter()
        .map(|stem| Regex::new(&format!("^{}{}", stem, DOCUMENT_EXTENSIONS)).unwrap())
        .collect()
}
