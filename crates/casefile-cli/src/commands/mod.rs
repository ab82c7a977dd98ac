pub mod anonymize;
pub mod extract;
pub mod scan;

use casefile_config::Config;
use casefile_sources::{Classifier, Denylist, ExtractorRegistry};

/// Classifier configured with the denylist from `config`
pub fn classifier(config: &Config) -> Classifier {
    let denylist = Denylist::new(config.denylist.patterns.clone());
    Classifier::with_parts(denylist, ExtractorRegistry::new())
}
