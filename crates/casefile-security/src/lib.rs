//! Deterministic anonymization of business documents
//!
//! Company and person names become hash-seeded pseudonyms; contact, identity,
//! financial and network identifiers become fixed redaction tokens.

pub mod anonymizer;
pub mod pseudonym;
pub mod vocabulary;

pub use anonymizer::{Anonymizer, Redaction, SensitiveCategory};
pub use vocabulary::{compliance_frameworks_mentioned, technologies_mentioned};
