use anyhow::Result;
use casefile_config::Config;
use casefile_engine::{Limits, Pipeline, export_website_content};
use std::path::PathBuf;

use super::classifier;

/// Command-line overrides for an extraction run
pub struct ExtractArgs {
    pub share: PathBuf,
    pub output: Option<PathBuf>,
    pub max_case_studies: Option<usize>,
    pub max_team_profiles: Option<usize>,
    pub established_since: Option<String>,
}

pub fn handle(config: &Config, args: ExtractArgs) -> Result<()> {
    let limits = Limits {
        max_case_studies: args
            .max_case_studies
            .unwrap_or(config.limits.max_case_studies),
        max_team_profiles: args
            .max_team_profiles
            .unwrap_or(config.limits.max_team_profiles),
    };
    let output = args
        .output
        .unwrap_or_else(|| config.export.output_dir.clone());
    let established_since = args
        .established_since
        .unwrap_or_else(|| config.export.established_since.clone());

    let mut pipeline = Pipeline::new(classifier(config), limits);
    let content = pipeline.process_share(&args.share)?;
    let stats = export_website_content(&content, &output, &established_since)?;

    println!("✓ Processed share: {}", args.share.display());
    println!(
        "  Files found: {} ({} categorized)",
        content.files_found, content.files_processed
    );
    println!(
        "  SOWs: {}, summaries: {}, resumes: {}",
        content.categories.sow, content.categories.executive_summary, content.categories.resume
    );
    if !content.skipped_dirs.is_empty() {
        println!("  Skipped directories: {}", content.skipped_dirs.len());
    }
    println!("  Case studies: {}", stats.total_case_studies);
    println!("  Team profiles: {}", stats.total_team_members);
    println!("  Output: {}", output.display());

    Ok(())
}
