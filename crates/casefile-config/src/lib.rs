use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for casefile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub denylist: DenylistConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_case_studies")]
    pub max_case_studies: usize,

    #[serde(default = "default_max_team_profiles")]
    pub max_team_profiles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenylistConfig {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_established_since")]
    pub established_since: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LimitsConfig::default(),
            denylist: DenylistConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_case_studies: default_max_case_studies(),
            max_team_profiles: default_max_team_profiles(),
        }
    }
}

impl Default for DenylistConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            established_since: default_established_since(),
        }
    }
}

fn default_max_case_studies() -> usize {
    10
}

fn default_max_team_profiles() -> usize {
    15
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./extracted_content")
}

fn default_established_since() -> String {
    "2018".to_string()
}

fn default_patterns() -> Vec<String> {
    vec![
        "**/.git".to_string(),
        "**/.svn".to_string(),
        "**/~$*".to_string(),
        "**/.DS_Store".to_string(),
        "**/Thumbs.db".to_string(),
    ]
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "casefile", "casefile") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.casefile/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.max_case_studies, 10);
        assert_eq!(config.limits.max_team_profiles, 15);
        assert_eq!(config.export.established_since, "2018");
        assert!(!config.denylist.patterns.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.limits.max_case_studies, config.limits.max_case_studies);
        assert_eq!(parsed.export.output_dir, config.export.output_dir);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Config = toml::from_str("[limits]\nmax_case_studies = 3\n").unwrap();
        assert_eq!(parsed.limits.max_case_studies, 3);
        assert_eq!(parsed.limits.max_team_profiles, 15);
        assert!(parsed.denylist.patterns.contains(&"**/.git".to_string()));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("casefile.toml");
        std::fs::write(&path, "[export]\nestablished_since = \"2015\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export.established_since, "2015");
        assert_eq!(config.export.output_dir, PathBuf::from("./extracted_content"));
    }
}
