//! Extraction pipeline: classify, anonymize, build records

pub mod builder;
pub mod enrichment;
pub mod export;

use casefile_core::{Category, Error, ProcessedContent, Result};
use casefile_sources::{Classifier, ScanReport};
use rand::Rng;
use rand::rngs::StdRng;
use std::path::Path;
use time::OffsetDateTime;

pub use builder::RecordBuilder;
pub use export::export_website_content;

/// Per-run record caps
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_case_studies: usize,
    pub max_team_profiles: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_case_studies: 10,
            max_team_profiles: 15,
        }
    }
}

pub struct Pipeline<R: Rng = StdRng> {
    classifier: Classifier,
    builder: RecordBuilder<R>,
    limits: Limits,
}

impl Pipeline<StdRng> {
    pub fn new(classifier: Classifier, limits: Limits) -> Self {
        Self::with_builder(classifier, RecordBuilder::new(), limits)
    }
}

impl<R: Rng> Pipeline<R> {
    pub fn with_builder(classifier: Classifier, builder: RecordBuilder<R>, limits: Limits) -> Self {
        Self {
            classifier,
            builder,
            limits,
        }
    }

    /// Scan `root` and build records from what was found.
    ///
    /// Only an inaccessible root is an error. Per-file and per-directory
    /// failures degrade into placeholder text or skipped entries.
    pub fn process_share(&mut self, root: &Path) -> Result<ProcessedContent> {
        tracing::info!("Scanning share: {}", root.display());

        let report = self.classifier.classify(root);
        if !report.accessible {
            return Err(Error::InaccessibleRoot(root.to_path_buf()));
        }

        tracing::info!("Found {} files", report.files.len());
        Ok(self.process_report(report))
    }

    /// Build records from an existing scan
    pub fn process_report(&mut self, report: ScanReport) -> ProcessedContent {
        let counts = report.counts();
        tracing::info!(
            "Categorized: {} SOWs, {} summaries, {} resumes, {} other",
            counts.sow,
            counts.executive_summary,
            counts.resume,
            counts.unknown
        );

        let summaries: Vec<&str> = report
            .files_in(Category::ExecutiveSummary)
            .map(|f| f.raw_text.as_str())
            .collect();

        let mut case_studies = Vec::new();
        for (i, sow) in report
            .files_in(Category::Sow)
            .take(self.limits.max_case_studies)
            .enumerate()
        {
            tracing::debug!("Building case study from {}", sow.path.display());
            let summary = summaries.get(i).copied();
            case_studies.push(self.builder.build_case_study(&sow.raw_text, summary));
        }

        let mut team_profiles = Vec::new();
        for resume in report
            .files_in(Category::Resume)
            .take(self.limits.max_team_profiles)
        {
            tracing::debug!("Building team profile from {}", resume.path.display());
            team_profiles.push(self.builder.build_team_profile(&resume.raw_text));
        }

        tracing::info!(
            "Generated {} case studies and {} team profiles",
            case_studies.len(),
            team_profiles.len()
        );

        ProcessedContent {
            case_studies,
            team_profiles,
            processing_date: OffsetDateTime::now_utc(),
            files_found: report.files.len(),
            files_processed: report.known_files(),
            categories: counts,
            skipped_dirs: report.skipped,
            anonymization_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline(limits: Limits) -> Pipeline<StdRng> {
        Pipeline::with_builder(
            Classifier::new(),
            RecordBuilder::with_rng(StdRng::seed_from_u64(9)),
            limits,
        )
    }

    #[test]
    fn test_inaccessible_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = pipeline(Limits::default()).process_share(&missing).unwrap_err();
        assert!(matches!(err, Error::InaccessibleRoot(p) if p == missing));
    }

    #[test]
    fn test_caps_are_applied() {
        let dir = TempDir::new().unwrap();
        for i in 0..4 {
            fs::write(dir.path().join(format!("{}-sow.txt", i)), format!("sow {}", i)).unwrap();
            fs::write(dir.path().join(format!("{}-resume.txt", i)), format!("cv {}", i)).unwrap();
        }

        let limits = Limits {
            max_case_studies: 2,
            max_team_profiles: 3,
        };
        let content = pipeline(limits).process_share(dir.path()).unwrap();

        assert_eq!(content.case_studies.len(), 2);
        assert_eq!(content.team_profiles.len(), 3);
        assert_eq!(content.files_found, 8);
        assert_eq!(content.files_processed, 8);
    }

    #[test]
    fn test_sow_paired_with_summary_by_position() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a-sow.txt"), "first SOW").unwrap();
        fs::write(dir.path().join("b-sow.txt"), "second SOW").unwrap();
        fs::write(dir.path().join("a-executive-summary.txt"), "Reach 555-123-4567").unwrap();

        let content = pipeline(Limits::default()).process_share(dir.path()).unwrap();

        assert_eq!(
            content.case_studies[0].anonymized_summary.as_deref(),
            Some("Reach [REDACTED_PHONE]")
        );
        assert!(content.case_studies[1].anonymized_summary.is_none());
    }

    #[test]
    fn test_unknown_files_counted_but_not_built() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lunch-menu.txt"), "tacos").unwrap();

        let content = pipeline(Limits::default()).process_share(dir.path()).unwrap();

        assert_eq!(content.files_found, 1);
        assert_eq!(content.files_processed, 0);
        assert_eq!(content.categories.unknown, 1);
        assert!(content.case_studies.is_empty());
        assert!(content.team_profiles.is_empty());
    }
}
