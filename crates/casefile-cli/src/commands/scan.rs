use anyhow::Result;
use casefile_config::Config;
use casefile_core::Category;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::classifier;

#[derive(Serialize)]
struct ScanEntry<'a> {
    path: &'a Path,
    category: Category,
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    files: Vec<ScanEntry<'a>>,
    skipped: &'a [PathBuf],
}

pub fn handle(config: &Config, share: &Path, json: bool) -> Result<()> {
    let report = classifier(config).classify(share);
    if !report.accessible {
        anyhow::bail!("Directory not accessible: {}", share.display());
    }

    if json {
        let output = ScanOutput {
            files: report
                .files
                .iter()
                .map(|f| ScanEntry {
                    path: &f.path,
                    category: f.category,
                })
                .collect(),
            skipped: &report.skipped,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if report.files.is_empty() {
        println!("No files found.");
    } else {
        println!("Files ({}):", report.files.len());
        for file in &report.files {
            println!("  [{}] {}", file.category, file.path.display());
        }
    }

    for dir in &report.skipped {
        println!("  Skipped: {}", dir.display());
    }

    Ok(())
}
