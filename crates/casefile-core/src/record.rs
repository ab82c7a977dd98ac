use serde::{Deserialize, Serialize};

/// Anonymized case study built from a statement of work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    /// External id, `CASE_` followed by the uppercase fingerprint
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "industry")]
    pub industry_sector: String,
    #[serde(rename = "duration")]
    pub engagement_duration: String,
    pub technologies: Vec<String>,
    pub outcomes: Vec<String>,
    pub key_points: Vec<String>,
    pub anonymized_id: String,
    /// Anonymized statement-of-work text. Never exported.
    #[serde(skip)]
    pub anonymized_text: String,
    /// Anonymized executive summary paired with this SOW, if any. Never exported.
    #[serde(skip)]
    pub anonymized_summary: Option<String>,
}

impl CaseStudy {
    pub fn with_anonymized_text(mut self, text: String, summary: Option<String>) -> Self {
        self.anonymized_text = text;
        self.anonymized_summary = summary;
        self
    }
}

/// Anonymized team member profile built from a resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub title: String,
    pub experience_years: u32,
    pub specializations: Vec<String>,
    pub technologies: Vec<String>,
    pub compliance_frameworks: Vec<String>,
    pub education: String,
    pub location: String,
    pub anonymized_id: String,
    #[serde(skip)]
    pub anonymized_text: String,
}

impl TeamProfile {
    pub fn with_anonymized_text(mut self, text: String) -> Self {
        self.anonymized_text = text;
        self
    }
}
