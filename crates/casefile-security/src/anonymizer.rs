use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::pseudonym;
use crate::vocabulary;

/// Kinds of sensitive data the anonymizer detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveCategory {
    CompanyName,
    Email,
    Phone,
    Ssn,
    IpAddress,
    DollarAmount,
    PersonName,
}

impl SensitiveCategory {
    /// Fixed token for categories that are deleted rather than substituted
    pub fn redaction_token(&self) -> Option<&'static str> {
        match self {
            SensitiveCategory::Email => Some("[REDACTED_EMAIL]"),
            SensitiveCategory::Phone => Some("[REDACTED_PHONE]"),
            SensitiveCategory::Ssn => Some("[REDACTED_SSN]"),
            SensitiveCategory::IpAddress => Some("[REDACTED_IP]"),
            SensitiveCategory::DollarAmount => Some("[REDACTED_AMOUNT]"),
            SensitiveCategory::CompanyName | SensitiveCategory::PersonName => None,
        }
    }

    fn pseudonym(&self, original: &str) -> String {
        match self {
            SensitiveCategory::PersonName => pseudonym::person_name(original),
            _ => pseudonym::company_name(original),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redaction {
    pub category: SensitiveCategory,
    pub count: usize,
}

/// A run of output text. Claimed runs were produced by an earlier pattern and
/// are never rewritten by a later one.
struct Segment {
    text: String,
    claimed: bool,
}

impl Segment {
    fn open(text: &str) -> Self {
        Self {
            text: text.to_string(),
            claimed: false,
        }
    }

    fn claimed(text: String) -> Self {
        Self {
            text,
            claimed: true,
        }
    }
}

/// Deterministic anonymizer for business documents
pub struct Anonymizer {
    patterns: Vec<(SensitiveCategory, Regex)>,
}

impl Anonymizer {
    pub fn new() -> Self {
        let mut patterns = Vec::new();

        // Order matters: an earlier category claims any span it rewrites
        patterns.push((
            SensitiveCategory::CompanyName,
            Regex::new(
                r"\b[A-Z][a-zA-Z\s]+(?:Corp|Inc|LLC|Ltd|Group|Solutions|Systems|Technologies)\b",
            )
            .unwrap(),
        ));
        patterns.push((
            SensitiveCategory::Email,
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
        ));
        patterns.push((
            SensitiveCategory::Phone,
            Regex::new(r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b")
                .unwrap(),
        ));
        patterns.push((
            SensitiveCategory::Ssn,
            Regex::new(r"\b[0-9]{3}-[0-9]{2}-[0-9]{4}\b").unwrap(),
        ));
        patterns.push((
            SensitiveCategory::IpAddress,
            Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap(),
        ));
        patterns.push((
            SensitiveCategory::DollarAmount,
            Regex::new(r"\$[0-9,]+(?:\.[0-9]{2})?").unwrap(),
        ));
        patterns.push((
            SensitiveCategory::PersonName,
            Regex::new(r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b").unwrap(),
        ));

        Self { patterns }
    }

    /// Anonymize `content`, discarding the per-category report
    pub fn anonymize(&self, content: &str) -> String {
        self.anonymize_with_report(content).0
    }

    /// Anonymize `content` and report how many spans each category rewrote
    pub fn anonymize_with_report(&self, content: &str) -> (String, Vec<Redaction>) {
        let mut segments = vec![Segment::open(content)];
        let mut counts: Vec<(SensitiveCategory, usize)> = Vec::new();

        for (category, pattern) in &self.patterns {
            let count = match category.redaction_token() {
                Some(token) => {
                    let (next, count) = substitute(segments, |text| {
                        pattern
                            .find_iter(text)
                            .map(|m| (m.range(), token.to_string()))
                            .collect()
                    });
                    segments = next;
                    count
                }
                None => {
                    let (next, count) = pseudonymize(segments, *category, pattern);
                    segments = next;
                    count
                }
            };
            counts.push((*category, count));
        }

        let mut result: String = segments.into_iter().map(|s| s.text).collect();

        // A redaction match can straddle the edge of a claimed span; sweep the
        // assembled text so none survives.
        for (category, pattern) in &self.patterns {
            if let Some(token) = category.redaction_token() {
                let extra = pattern.find_iter(&result).count();
                if extra > 0 {
                    result = pattern.replace_all(&result, token).into_owned();
                    if let Some(entry) = counts.iter_mut().find(|(c, _)| c == category) {
                        entry.1 += extra;
                    }
                }
            }
        }

        let redactions = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| Redaction { category, count })
            .collect();

        (result, redactions)
    }

    pub fn anonymize_company_name(&self, original: &str) -> String {
        pseudonym::company_name(original)
    }

    pub fn anonymize_person_name(&self, original: &str) -> String {
        pseudonym::person_name(original)
    }

    pub fn technologies_mentioned(&self, content: &str) -> Vec<String> {
        vocabulary::technologies_mentioned(content)
    }

    pub fn compliance_frameworks_mentioned(&self, content: &str) -> Vec<String> {
        vocabulary::compliance_frameworks_mentioned(content)
    }
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every occurrence of each distinct match with its pseudonym.
/// Longer matches go first so a match contained in another is not split.
fn pseudonymize(
    segments: Vec<Segment>,
    category: SensitiveCategory,
    pattern: &Regex,
) -> (Vec<Segment>, usize) {
    let mut originals: Vec<String> = Vec::new();
    for segment in segments.iter().filter(|s| !s.claimed) {
        for m in pattern.find_iter(&segment.text) {
            if !originals.iter().any(|o| o == m.as_str()) {
                originals.push(m.as_str().to_string());
            }
        }
    }
    originals.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut segments = segments;
    let mut total = 0;
    for original in &originals {
        let replacement = category.pseudonym(original);
        let (next, count) = substitute(segments, |text| {
            text.match_indices(original.as_str())
                .map(|(start, _)| (start..start + original.len(), replacement.clone()))
                .collect()
        });
        segments = next;
        total += count;
    }

    (segments, total)
}

/// Split each open segment around the spans `find` reports, claiming the
/// replacements. Returns the new segments and the number of spans replaced.
fn substitute<F>(segments: Vec<Segment>, mut find: F) -> (Vec<Segment>, usize)
where
    F: FnMut(&str) -> Vec<(Range<usize>, String)>,
{
    let mut out = Vec::with_capacity(segments.len());
    let mut count = 0;

    for segment in segments {
        if segment.claimed {
            out.push(segment);
            continue;
        }

        let mut last = 0;
        for (range, replacement) in find(&segment.text) {
            if range.start > last {
                out.push(Segment::open(&segment.text[last..range.start]));
            }
            out.push(Segment::claimed(replacement));
            last = range.end;
            count += 1;
        }
        if last < segment.text.len() {
            out.push(Segment::open(&segment.text[last..]));
        }
    }

    (out, count)
}
