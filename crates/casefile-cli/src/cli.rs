use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casefile")]
#[command(
    about = "Turn a document share into anonymized case studies and team profiles",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a share, build anonymized records and export them as JSON
    Extract {
        /// Root directory of the share
        share: PathBuf,

        /// Output directory (default from config: ./extracted_content)
        output: Option<PathBuf>,

        /// Maximum case studies to build (default from config: 10)
        #[arg(long)]
        max_case_studies: Option<usize>,

        /// Maximum team profiles to build (default from config: 15)
        #[arg(long)]
        max_team_profiles: Option<usize>,

        /// Year reported in the statistics file (default from config: 2018)
        #[arg(long)]
        established_since: Option<String>,
    },

    /// List classified files without building records
    Scan {
        /// Root directory of the share
        share: PathBuf,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the anonymized text of a single file
    Anonymize {
        /// File to extract and anonymize
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::try_parse_from([
            "casefile",
            "extract",
            "/mnt/share",
            "out",
            "--max-case-studies",
            "4",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Extract {
                share,
                output,
                max_case_studies,
                max_team_profiles,
                ..
            } => {
                assert_eq!(share, PathBuf::from("/mnt/share"));
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(max_case_studies, Some(4));
                assert_eq!(max_team_profiles, None);
            }
            _ => panic!("expected extract"),
        }
    }
}
