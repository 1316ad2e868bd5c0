//! Configuration handling for Roster
//!
//! Configuration is stored in `.roster/config.toml` (workspace) and
//! `~/.config/roster-cli/config.toml` (global). Missing files fall back to
//! defaults.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the workspace directory
pub const WORKSPACE_DIR: &str = ".roster";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Workspace-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Person records file, relative to `.roster/`
    pub data_file: PathBuf,

    /// Base directory for relative `export` paths, relative to the workspace root
    pub export_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("people.jsonl"),
            export_dir: PathBuf::from("."),
        }
    }
}

impl ProjectConfig {
    /// Rejects values that would escape the workspace directory layout
    ///
    /// `data_file` must stay inside `.roster/`: no absolute paths and no
    /// `..` components.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let escapes = self
            .data_file
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if self.data_file.file_name().is_none() || escapes {
            return Err(ConfigError::Invalid(
                "data_file must be a relative file name inside .roster".to_string(),
            ));
        }
        Ok(())
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Workspace configuration
///
/// The global file is read separately through [`Config::load_global`], only
/// where the output format is chosen.
#[derive(Debug, Clone)]
pub struct Config {
    pub project: ProjectConfig,
}

impl Config {
    /// Loads configuration for a specific workspace
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let project = Self::load_project_config(project_root)?;
        Ok(Self { project })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "roster", "roster-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    pub fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(WORKSPACE_DIR).join("config.toml");

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;
        config.validate()?;
        Ok(config)
    }

    /// Finds the workspace root by looking for a `.roster/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_project_root_from(&current)
    }

    /// Walks up from `start` looking for a `.roster/` directory
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(WORKSPACE_DIR).is_dir())
            .map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.data_file, PathBuf::from("people.jsonl"));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(GlobalConfig::default().default_format, OutputFormat::Text);
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
data_file = "contacts.jsonl"
export_dir = "exports"
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data_file, PathBuf::from("contacts.jsonl"));
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn partial_project_config_uses_defaults() {
        let config: ProjectConfig = toml::from_str("export_dir = \"out\"").unwrap();
        assert_eq!(config.data_file, PathBuf::from("people.jsonl"));
    }

    #[test]
    fn parse_global_config() {
        let config: GlobalConfig = toml::from_str("default_format = \"json\"").unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn absolute_data_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let roster_dir = dir.path().join(WORKSPACE_DIR);
        fs::create_dir_all(&roster_dir).unwrap();
        fs::write(roster_dir.join("config.toml"), "data_file = \"/etc/people.jsonl\"").unwrap();

        assert!(Config::for_project(dir.path()).is_err());
    }

    #[test]
    fn data_file_outside_roster_dir_is_rejected() {
        for data_file in ["../people.jsonl", "../../people.jsonl", "sub/../../x.jsonl", ""] {
            let config = ProjectConfig {
                data_file: PathBuf::from(data_file),
                ..ProjectConfig::default()
            };
            assert!(config.validate().is_err(), "{:?} should be rejected", data_file);
        }

        let nested = ProjectConfig {
            data_file: PathBuf::from("data/people.jsonl"),
            ..ProjectConfig::default()
        };
        assert!(nested.validate().is_ok());
    }

    #[test]
    fn project_config_loads_without_global_file() {
        let dir = TempDir::new().unwrap();
        let roster_dir = dir.path().join(WORKSPACE_DIR);
        fs::create_dir_all(&roster_dir).unwrap();
        fs::write(roster_dir.join("config.toml"), "export_dir = \"out\"").unwrap();

        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config.project.export_dir, PathBuf::from("out"));
        assert_eq!(config.project.data_file, PathBuf::from("people.jsonl"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let roster_dir = dir.path().join(WORKSPACE_DIR);
        fs::create_dir_all(&roster_dir).unwrap();
        fs::write(roster_dir.join("config.toml"), "data_file = [").unwrap();

        let err = Config::for_project(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse project config"));
    }

    #[test]
    fn find_project_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(WORKSPACE_DIR)).unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let root = Config::find_project_root_from(&sub_dir);
        assert_eq!(root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn find_project_root_outside_workspace() {
        let dir = TempDir::new().unwrap();
        let sub_dir = dir.path().join("sub");
        fs::create_dir_all(&sub_dir).unwrap();

        // A workspace further up (e.g. in $HOME) would be found, so only
        // check that the temp dir itself is not reported.
        let root = Config::find_project_root_from(&sub_dir);
        assert_ne!(root.as_deref(), Some(dir.path()));
        assert_ne!(root.as_deref(), Some(sub_dir.as_path()));
    }
}
