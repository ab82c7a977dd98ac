//! Record builder: anonymized case studies and team profiles

use casefile_core::{CaseStudy, TeamProfile, fingerprint};
use casefile_security::Anonymizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::enrichment;

/// Technologies quoted in the first case-study key point
pub const KEY_POINT_TECHNOLOGIES: usize = 3;
/// Technologies kept on a team profile
pub const MAX_PROFILE_TECHNOLOGIES: usize = 6;

const EDUCATION: &str = "Advanced Security Certifications";

/// Builds records from raw document text.
///
/// Keywords are extracted from the original text in a separate pass from
/// anonymization, since substitution could remove them. Identifiers come from
/// a content hash. Everything else is decorative and drawn from `rng`.
pub struct RecordBuilder<R: Rng = StdRng> {
    anonymizer: Anonymizer,
    rng: R,
}

impl RecordBuilder<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RecordBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RecordBuilder<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            anonymizer: Anonymizer::new(),
            rng,
        }
    }

    pub fn build_case_study(&mut self, sow_text: &str, summary_text: Option<&str>) -> CaseStudy {
        let technologies = self.anonymizer.technologies_mentioned(sow_text);
        let compliance = self.anonymizer.compliance_frameworks_mentioned(sow_text);

        let anonymized_sow = self.anonymize(sow_text);
        let anonymized_summary = summary_text.map(|s| self.anonymize(s));

        let industry = enrichment::industry(&mut self.rng);
        let duration = enrichment::duration(&mut self.rng);
        let outcomes = enrichment::outcomes(&mut self.rng);

        let anonymized_id = fingerprint(sow_text.as_bytes());

        CaseStudy {
            id: format!("CASE_{}", anonymized_id.to_uppercase()),
            title: format!("Enterprise Security Transformation - {} Sector", industry),
            summary: format!(
                "Comprehensive cybersecurity enhancement for a leading {} organization",
                industry.to_lowercase()
            ),
            key_points: key_points(&technologies, &compliance),
            industry_sector: industry,
            engagement_duration: duration,
            technologies,
            outcomes,
            anonymized_id,
            anonymized_text: String::new(),
            anonymized_summary: None,
        }
        .with_anonymized_text(anonymized_sow, anonymized_summary)
    }

    pub fn build_team_profile(&mut self, resume_text: &str) -> TeamProfile {
        let mut technologies = self.anonymizer.technologies_mentioned(resume_text);
        technologies.truncate(MAX_PROFILE_TECHNOLOGIES);
        let compliance_frameworks = self.anonymizer.compliance_frameworks_mentioned(resume_text);

        let anonymized_resume = self.anonymize(resume_text);

        TeamProfile {
            name: enrichment::profile_name(&mut self.rng),
            title: enrichment::profile_title(&mut self.rng),
            experience_years: enrichment::experience_years(&mut self.rng),
            specializations: enrichment::specializations(&mut self.rng),
            technologies,
            compliance_frameworks,
            education: EDUCATION.to_string(),
            location: enrichment::location(&mut self.rng),
            anonymized_id: fingerprint(resume_text.as_bytes()),
            anonymized_text: String::new(),
        }
        .with_anonymized_text(anonymized_resume)
    }

    fn anonymize(&self, text: &str) -> String {
        let (anonymized, redactions) = self.anonymizer.anonymize_with_report(text);
        for redaction in redactions {
            tracing::debug!("Rewrote {:?} x{}", redaction.category, redaction.count);
        }
        anonymized
    }
}

fn key_points(technologies: &[String], compliance: &[String]) -> Vec<String> {
    let mut points = Vec::new();

    if !technologies.is_empty() {
        let quoted = &technologies[..technologies.len().min(KEY_POINT_TECHNOLOGIES)];
        points.push(format!("Implemented {} security stack", quoted.join(", ")));
    }
    if !compliance.is_empty() {
        points.push(format!("Achieved {} compliance", compliance.join(", ")));
    }
    points.push("24/7 monitoring and incident response".to_string());
    points.push("Zero-trust architecture deployment".to_string());

    points
}
