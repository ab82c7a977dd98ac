//! Hash-seeded pseudonyms
//!
//! Every call builds its own generator from the seed of the original string, so
//! the same input always yields the same stand-in regardless of call order or
//! thread. ChaCha8 output for a seed is fixed across platforms and releases.

use casefile_core::seed;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::vocabulary::{COMPANY_PREFIXES, COMPANY_SUFFIXES, FIRST_NAMES, INDUSTRIES, LAST_NAMES};

/// Stand-in company name of the form `{prefix} {industry} {suffix}`
pub fn company_name(original: &str) -> String {
    let mut rng = seeded(original);
    let prefix = pick(&mut rng, COMPANY_PREFIXES);
    let suffix = pick(&mut rng, COMPANY_SUFFIXES);
    let industry = pick(&mut rng, INDUSTRIES);

    format!("{} {} {}", prefix, industry, suffix)
}

/// Stand-in person name of the form `{first} {last}`
pub fn person_name(original: &str) -> String {
    let mut rng = seeded(original);
    let first = pick(&mut rng, FIRST_NAMES);
    let last = pick(&mut rng, LAST_NAMES);

    format!("{} {}", first, last)
}

fn seeded(original: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed(original.as_bytes()))
}

fn pick<'a, R: Rng>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or_default()
}
