//! JSON export of a run's records and statistics

use casefile_core::{Error, ProcessedContent, Result, WebsiteStats};
use serde::Serialize;
use std::path::Path;

pub const CASE_STUDIES_FILE: &str = "case_studies.json";
pub const TEAM_PROFILES_FILE: &str = "team_profiles.json";
pub const STATS_FILE: &str = "website_stats.json";

/// Write case studies, team profiles and aggregate statistics under
/// `output_dir`, creating it if needed. Returns the statistics written.
pub fn export_website_content(
    content: &ProcessedContent,
    output_dir: &Path,
    established_since: &str,
) -> Result<WebsiteStats> {
    std::fs::create_dir_all(output_dir).map_err(|source| Error::Export {
        path: output_dir.to_path_buf(),
        source,
    })?;

    write_json(&output_dir.join(CASE_STUDIES_FILE), &content.case_studies)?;
    write_json(&output_dir.join(TEAM_PROFILES_FILE), &content.team_profiles)?;

    let stats = WebsiteStats::aggregate(content, established_since);
    write_json(&output_dir.join(STATS_FILE), &stats)?;

    tracing::info!(
        "Exported {} case studies and {} team profiles to {}",
        stats.total_case_studies,
        stats.total_team_members,
        output_dir.display()
    );

    Ok(stats)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| Error::Export {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_core::CategoryCounts;
    use tempfile::TempDir;
    use time::OffsetDateTime;

    use crate::builder::RecordBuilder;

    fn content() -> ProcessedContent {
        let mut builder = RecordBuilder::new();
        ProcessedContent {
            case_studies: vec![builder.build_case_study("SIEM rollout for Initech Inc", None)],
            team_profiles: vec![builder.build_team_profile("EDR and GRC work")],
            processing_date: OffsetDateTime::now_utc(),
            files_found: 2,
            files_processed: 2,
            categories: CategoryCounts::default(),
            skipped_dirs: vec![],
            anonymization_complete: true,
        }
    }

    #[test]
    fn test_writes_three_documents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("site");

        let stats = export_website_content(&content(), &out, "2018").unwrap();

        let case_studies: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(CASE_STUDIES_FILE)).unwrap())
                .unwrap();
        assert_eq!(case_studies.as_array().unwrap().len(), 1);
        assert_eq!(case_studies[0]["technologies"][0], "SIEM");
        assert!(case_studies[0].get("anonymized_text").is_none());

        let profiles: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(TEAM_PROFILES_FILE)).unwrap())
                .unwrap();
        assert_eq!(profiles[0]["technologies"][0], "EDR");

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(STATS_FILE)).unwrap())
                .unwrap();
        assert_eq!(written["established_since"], "2018");
        assert_eq!(written["total_case_studies"], 1);
        assert_eq!(written["total_team_members"], 1);
        assert_eq!(stats.technologies_used, vec!["SIEM"]);
    }

    #[test]
    fn test_unwritable_destination_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("occupied");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let err = export_website_content(&content(), &blocker, "2018").unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
    }
}
