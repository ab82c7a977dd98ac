//! Core domain models for casefile
//!
//! This crate contains:
//! - Discovered documents (ClassifiedFile, Category)
//! - Anonymized records (CaseStudy, TeamProfile)
//! - Run output and aggregate statistics
//! - Content fingerprints shared by identifiers and pseudonym seeds

pub mod content;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod record;

pub use content::{CategoryCounts, ProcessedContent, WebsiteStats};
pub use document::{Category, ClassifiedFile};
pub use error::{Error, Result};
pub use fingerprint::{fingerprint, seed};
pub use record::{CaseStudy, TeamProfile};
