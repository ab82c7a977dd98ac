use anyhow::Result;
use casefile_security::Anonymizer;
use casefile_sources::ExtractorRegistry;
use std::path::Path;

pub fn handle(file: &Path) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("Not a file: {}", file.display());
    }

    let text = ExtractorRegistry::new().extract_text(file);
    let (anonymized, redactions) = Anonymizer::new().anonymize_with_report(&text);

    for redaction in &redactions {
        tracing::info!("{:?}: {}", redaction.category, redaction.count);
    }
    println!("{}", anonymized);

    Ok(())
}
