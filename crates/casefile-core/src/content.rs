//! Run output: processed records, the run summary and aggregate statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use time::OffsetDateTime;

use crate::{CaseStudy, TeamProfile};

/// Number of files assigned to each known category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub sow: usize,
    pub executive_summary: usize,
    pub resume: usize,
    pub unknown: usize,
}

/// Everything a single extraction run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedContent {
    pub case_studies: Vec<CaseStudy>,
    pub team_profiles: Vec<TeamProfile>,
    #[serde(with = "time::serde::rfc3339")]
    pub processing_date: OffsetDateTime,
    /// Regular files visited under the root
    pub files_found: usize,
    /// Files that matched a known category
    pub files_processed: usize,
    pub categories: CategoryCounts,
    /// Directories that could not be read and were skipped
    pub skipped_dirs: Vec<PathBuf>,
    pub anonymization_complete: bool,
}

/// Aggregate figures published alongside the records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteStats {
    pub total_case_studies: usize,
    pub total_team_members: usize,
    pub established_since: String,
    pub industries_served: Vec<String>,
    pub technologies_used: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl WebsiteStats {
    /// Aggregate over the records of one run. Lists are distinct and sorted.
    pub fn aggregate(content: &ProcessedContent, established_since: &str) -> Self {
        let industries: BTreeSet<&str> = content
            .case_studies
            .iter()
            .map(|cs| cs.industry_sector.as_str())
            .collect();

        let technologies: BTreeSet<&str> = content
            .case_studies
            .iter()
            .flat_map(|cs| cs.technologies.iter().map(String::as_str))
            .collect();

        Self {
            total_case_studies: content.case_studies.len(),
            total_team_members: content.team_profiles.len(),
            established_since: established_since.to_string(),
            industries_served: industries.into_iter().map(str::to_string).collect(),
            technologies_used: technologies.into_iter().map(str::to_string).collect(),
            last_updated: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_study(industry: &str, technologies: &[&str]) -> CaseStudy {
        CaseStudy {
            id: String::new(),
            title: String::new(),
            summary: String::new(),
            industry_sector: industry.to_string(),
            engagement_duration: String::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            outcomes: vec![],
            key_points: vec![],
            anonymized_id: String::new(),
            anonymized_text: String::new(),
            anonymized_summary: None,
        }
    }

    fn content(case_studies: Vec<CaseStudy>) -> ProcessedContent {
        ProcessedContent {
            case_studies,
            team_profiles: vec![],
            processing_date: OffsetDateTime::now_utc(),
            files_found: 0,
            files_processed: 0,
            categories: CategoryCounts::default(),
            skipped_dirs: vec![],
            anonymization_complete: true,
        }
    }

    #[test]
    fn test_stats_are_distinct_and_sorted() {
        let content = content(vec![
            case_study("Retail", &["SIEM", "MFA"]),
            case_study("Energy", &["MFA", "EDR"]),
            case_study("Retail", &[]),
        ]);

        let stats = WebsiteStats::aggregate(&content, "2018");

        assert_eq!(stats.total_case_studies, 3);
        assert_eq!(stats.total_team_members, 0);
        assert_eq!(stats.established_since, "2018");
        assert_eq!(stats.industries_served, vec!["Energy", "Retail"]);
        assert_eq!(stats.technologies_used, vec!["EDR", "MFA", "SIEM"]);
    }

    #[test]
    fn test_empty_run_stats() {
        let stats = WebsiteStats::aggregate(&content(vec![]), "2018");
        assert_eq!(stats.total_case_studies, 0);
        assert!(stats.industries_served.is_empty());
        assert!(stats.technologies_used.is_empty());
    }
}
