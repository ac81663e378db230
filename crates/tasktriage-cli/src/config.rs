//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tasktriage_classifiers::profiles::DEFAULT_PROFILE;
use tasktriage_classifiers::{SecondaryMode, DEFAULT_HISTORY_CAPACITY};

/// Settings loaded from `tasktriage.yaml`, overridden by flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Profile used for classification
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Extra rule table files registered alongside the built-in profiles
    #[serde(default)]
    pub profiles: Vec<ProfileFile>,

    /// Results kept by an interactive session
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    #[serde(default)]
    pub secondary_mode: SecondaryMode,

    #[serde(default)]
    pub format: OutputFormat,
}

/// A named rule table file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFile {
    pub name: String,
    pub path: PathBuf,
}

impl ProfileFile {
    /// Profile named after the file stem
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self { name, path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

impl CliConfig {
    /// Load configuration from file and CLI overrides
    ///
    /// A missing file is only an error when it was named explicitly.
    pub fn load(config_path: Option<&Path>, cli: &crate::Cli) -> anyhow::Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?
        } else if config_path.is_some() {
            anyhow::bail!("Config file not found: {}", path.display());
        } else {
            Self::default()
        };

        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &crate::Cli) {
        if let Some(rules) = &cli.rules {
            let file = ProfileFile::from_path(rules);
            self.profile = file.name.clone();
            self.profiles.retain(|p| p.name != file.name);
            self.profiles.push(file);
        }

        if let Some(profile) = &cli.profile {
            self.profile = profile.clone();
        }

        if let Some(format) = cli.format {
            self.format = format;
        }

        if cli.strict_secondaries {
            self.secondary_mode = SecondaryMode::NonZero;
        }

        if let Some(capacity) = cli.history {
            self.history_capacity = capacity;
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            profiles: Vec::new(),
            history_capacity: default_history_capacity(),
            secondary_mode: SecondaryMode::default(),
            format: OutputFormat::default(),
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = "tasktriage.yaml";

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tasktriage").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_overrides() {
        let mut config = CliConfig::default();
        config.apply_overrides(&cli(&["profiles"]));

        assert!(config.profiles.is_empty());
        assert_eq!(config.profile, "task_types");
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.secondary_mode, SecondaryMode::IncludeZero);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let result = CliConfig::load(Some(&missing), &cli(&["profiles"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_values_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasktriage.yaml");
        std::fs::write(
            &path,
            "profile: bug_categories\nhistory_capacity: 25\nsecondary_mode: non_zero\nformat: json\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path), &cli(&["profiles"])).unwrap();
        assert_eq!(config.profile, "bug_categories");
        assert_eq!(config.history_capacity, 25);
        assert_eq!(config.secondary_mode, SecondaryMode::NonZero);
        assert_eq!(config.format, OutputFormat::Json);

        let config = CliConfig::load(
            Some(&path),
            &cli(&["--profile", "error_types", "--format", "text", "--history", "3", "profiles"]),
        )
        .unwrap();
        assert_eq!(config.profile, "error_types");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.history_capacity, 3);
    }

    #[test]
    fn test_rules_file_selects_its_profile() {
        let mut config = CliConfig::default();
        config.apply_overrides(&cli(&["--rules", "/tmp/deploy_rules.yaml", "profiles"]));

        assert_eq!(config.profile, "deploy_rules");
        assert_eq!(
            config.profiles,
            vec![ProfileFile {
                name: "deploy_rules".to_string(),
                path: PathBuf::from("/tmp/deploy_rules.yaml"),
            }]
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasktriage.yaml");
        std::fs::write(&path, "history_capacity: [oops\n").unwrap();

        assert!(CliConfig::load(Some(&path), &cli(&["profiles"])).is_err());
    }
}
