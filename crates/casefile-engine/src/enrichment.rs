//! Decorative enrichment
//!
//! These fields dress up a record and carry no information from the source
//! document. They draw only from the generator they are given, never from
//! document content.

use casefile_security::vocabulary::{INDUSTRIES, LOCATIONS};
use rand::Rng;
use rand::seq::SliceRandom;

pub const DURATIONS: &[&str] = &["3 months", "6 months", "12 months", "18 months", "2 years"];

pub const OUTCOMES: &[&str] = &[
    "Achieved 99.9% security incident reduction",
    "Improved compliance audit scores by 40%",
    "Reduced security response time by 75%",
    "Implemented zero-trust architecture",
    "Enhanced threat detection capabilities",
];

pub const SPECIALIZATIONS: &[&str] = &[
    "Cloud Security Architecture",
    "Incident Response",
    "Compliance & Governance",
    "Application Security",
    "Network Security",
    "Risk Management",
    "Security Engineering",
    "Threat Intelligence",
    "Penetration Testing",
    "DevSecOps",
    "Identity & Access Management",
    "Cryptography",
];

pub const PROFILE_FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Casey", "Morgan", "Taylor", "Blake", "Cameron", "Riley", "Avery", "Quinn",
];

pub const OUTCOME_COUNT: usize = 3;
pub const SPECIALIZATION_COUNT: usize = 3;
pub const EXPERIENCE_YEARS: std::ops::RangeInclusive<u32> = 8..=20;

pub fn industry<R: Rng>(rng: &mut R) -> String {
    pick(rng, INDUSTRIES)
}

pub fn duration<R: Rng>(rng: &mut R) -> String {
    pick(rng, DURATIONS)
}

/// Three distinct outcomes
pub fn outcomes<R: Rng>(rng: &mut R) -> Vec<String> {
    sample(rng, OUTCOMES, OUTCOME_COUNT)
}

/// Three distinct specializations
pub fn specializations<R: Rng>(rng: &mut R) -> Vec<String> {
    sample(rng, SPECIALIZATIONS, SPECIALIZATION_COUNT)
}

/// First name plus a last initial, e.g. `Quinn R.`
pub fn profile_name<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, PROFILE_FIRST_NAMES);
    let initial = char::from(b'A' + rng.gen_range(0..26u8));
    format!("{} {}.", first, initial)
}

pub fn profile_title<R: Rng>(rng: &mut R) -> String {
    format!("Senior {} Specialist", pick(rng, SPECIALIZATIONS))
}

pub fn experience_years<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(EXPERIENCE_YEARS)
}

pub fn location<R: Rng>(rng: &mut R) -> String {
    pick(rng, LOCATIONS)
}

fn pick<R: Rng>(rng: &mut R, list: &[&str]) -> String {
    list[rng.gen_range(0..list.len())].to_string()
}

fn sample<R: Rng>(rng: &mut R, list: &[&str], amount: usize) -> Vec<String> {
    list.choose_multiple(rng, amount)
        .map(|s| s.to_string())
        .collect()
}
