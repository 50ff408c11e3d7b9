use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::setup::steps::{builtin_steps, Step, StepContent};

const APP_DIR: &str = "qhub-wizard";
const LOCAL_CONFIG: &str = "qhub-wizard.yaml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub sidebar_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "QHub Deployment Wizard".into(),
            sidebar_width: 34,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}

/// Step table override. An empty list keeps the built-in QHub steps.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct WizardConfig {
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Welcome,
    ProjectSetup,
    #[default]
    Placeholder,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StepConfig {
    pub label: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub kind: StepKind,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl StepConfig {
    fn to_step(&self) -> Step {
        let content = match self.kind {
            StepKind::Welcome => StepContent::Welcome,
            StepKind::ProjectSetup => StepContent::ProjectSetup,
            StepKind::Placeholder => StepContent::Placeholder(
                self.placeholder.clone().unwrap_or_else(|| self.label.clone()),
            ),
        };
        Step {
            label: self.label.clone(),
            title: self.title.clone(),
            optional: self.optional,
            content,
        }
    }
}

impl Config {
    /// Build the step table the wizard is mounted with
    pub fn steps(&self) -> Vec<Step> {
        if self.wizard.steps.is_empty() {
            builtin_steps()
        } else {
            self.wizard.steps.iter().map(StepConfig::to_step).collect()
        }
    }
}

/// Parse a YAML config document
pub fn parse_config(contents: &str) -> Result<Config> {
    // An empty file is a valid, all-default config
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml_ng::from_str(contents)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Load the config and report where it came from.
///
/// Lookup order: explicit path, `./qhub-wizard.yaml`, the user config
/// directory, then built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    // 1. Path given on the command line or through the environment
    if let Some(path) = explicit {
        return Ok((read_config(path)?, Some(path.to_path_buf())));
    }

    // 2. Check local qhub-wizard.yaml
    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        return Ok((read_config(local_config)?, Some(local_config.to_path_buf())));
    }

    // 3. Check ~/.config/qhub-wizard/config.yaml
    if let Some(config_path) = get_config_path() {
        if config_path.exists() {
            return Ok((read_config(&config_path)?, Some(config_path)));
        }
    }

    Ok((Config::default(), None))
}

/// Get the user config file path (for display purposes)
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.yaml"))
}

/// Default log file location when none is configured
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("qhub-wizard.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.title, "QHub Deployment Wizard");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.steps(), builtin_steps());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.steps().len(), 7);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config("ui:\n  sidebar_width: 40\n").unwrap();
        assert_eq!(config.ui.sidebar_width, 40);
        assert_eq!(config.ui.title, "QHub Deployment Wizard");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_custom_steps() {
        let yaml = r#"
wizard:
  steps:
    - label: Intro
      kind: welcome
    - label: Project
      kind: project_setup
    - label: Storage
      title: "{project} - Storage"
      placeholder: storage placeholder
    - label: Extras
      optional: true
"#;
        let steps = parse_config(yaml).unwrap().steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].content, StepContent::Welcome);
        assert_eq!(steps[1].content, StepContent::ProjectSetup);
        assert_eq!(steps[2].title.as_deref(), Some("{project} - Storage"));
        assert_eq!(steps[2].content, StepContent::Placeholder("storage placeholder".into()));
        assert_eq!(steps[3].content, StepContent::Placeholder("Extras".into()));
        assert!(steps[3].optional);
        assert!(!steps[2].optional);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(parse_config("wizard:\n  steps: 12\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: debug").unwrap();

        let (config, source) = load_config(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
