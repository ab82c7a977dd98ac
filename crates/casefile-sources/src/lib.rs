pub mod classifier;
pub mod denylist;
pub mod document;
pub mod extractor;
pub mod text;

pub use classifier::{Classifier, ScanReport};
pub use denylist::Denylist;
pub use extractor::{ExtractorRegistry, TextExtractor};
