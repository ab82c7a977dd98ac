//! Closed vocabularies
//!
//! The keyword lists drive presence tests on source text. The name lists feed
//! pseudonym generation. None of them are mutated at runtime.

pub const INDUSTRIES: &[&str] = &[
    "Financial Services",
    "Healthcare",
    "Technology",
    "Manufacturing",
    "Retail",
    "Energy",
    "Government",
    "Education",
    "Insurance",
    "Telecommunications",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Global",
    "United",
    "Advanced",
    "Premier",
    "Dynamic",
    "Strategic",
    "Innovative",
    "Leading",
    "Enterprise",
    "Fortune",
    "Apex",
    "Summit",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Corp",
    "Inc",
    "Group",
    "Solutions",
    "Systems",
    "Technologies",
    "Partners",
    "Associates",
    "Enterprises",
    "Holdings",
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Casey", "Morgan", "Taylor", "Blake", "Cameron", "Riley",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore",
];

pub const LOCATIONS: &[&str] = &[
    "Portland",
    "Seattle",
    "Austin",
    "Denver",
    "Chicago",
    "Boston",
    "Atlanta",
    "Dallas",
    "Phoenix",
    "San Diego",
    "Remote",
];

pub const SECURITY_TECHNOLOGIES: &[&str] = &[
    "SIEM",
    "EDR",
    "XDR",
    "SOAR",
    "IAM",
    "PAM",
    "DLP",
    "CASB",
    "Zero Trust",
    "MFA",
    "SSO",
    "PKI",
    "WAF",
    "IPS",
    "IDS",
    "Cloud Security",
    "Container Security",
    "DevSecOps",
    "GRC",
];

pub const COMPLIANCE_FRAMEWORKS: &[&str] = &[
    "SOC 2 Type II",
    "ISO 27001",
    "HIPAA",
    "PCI DSS",
    "GDPR",
    "NIST CSF",
    "CIS Controls",
    "FedRAMP",
    "FISMA",
    "CCPA",
];

/// Most technologies reported for one document
pub const MAX_TECHNOLOGIES: usize = 5;

/// Technology keywords present in `text`, in vocabulary order, at most five
pub fn technologies_mentioned(text: &str) -> Vec<String> {
    let mut found = keywords_present(text, SECURITY_TECHNOLOGIES);
    found.truncate(MAX_TECHNOLOGIES);
    found
}

/// All compliance frameworks present in `text`, in vocabulary order
pub fn compliance_frameworks_mentioned(text: &str) -> Vec<String> {
    keywords_present(text, COMPLIANCE_FRAMEWORKS)
}

fn keywords_present(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect()
}
