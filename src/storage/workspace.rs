//! Workspace management
//!
//! A workspace is any directory holding a `.roster/` directory. It owns the
//! configuration and gives access to the person store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::WORKSPACE_DIR;
use super::{Config, PersonStore};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not in a roster workspace. Run 'roster init' first.")]
    NotInWorkspace,
}

const DEFAULT_CONFIG: &str = r#"# Roster configuration

# Person records, relative to this directory
data_file = "people.jsonl"

# Base directory for relative export paths, relative to the workspace root
export_dir = "."
"#;

const GITIGNORE: &str = r#"# Temp files left by an interrupted save
*.tmp
"#;

/// A Roster workspace
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens an existing workspace at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(WORKSPACE_DIR).is_dir() {
            return Err(WorkspaceError::NotInWorkspace.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the workspace at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(WorkspaceError::NotInWorkspace)?;

        Self::open(root)
    }

    /// Initializes a workspace at the given path
    ///
    /// Existing files are left alone, so running this twice is harmless.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let roster_dir = root.join(WORKSPACE_DIR);

        fs::create_dir_all(&roster_dir).with_context(|| {
            format!("Failed to create {} directory: {}", WORKSPACE_DIR, roster_dir.display())
        })?;

        let config_path = roster_dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let gitignore_path = roster_dir.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(&gitignore_path, GITIGNORE).with_context(|| {
                format!("Failed to write .gitignore: {}", gitignore_path.display())
            })?;
        }

        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the `.roster` directory path
    pub fn roster_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the person store named by the configuration
    pub fn person_store(&self) -> PersonStore {
        PersonStore::new(self.roster_dir().join(&self.config.project.data_file))
    }

    /// Returns the directory relative export paths are placed under
    pub fn export_dir(&self) -> PathBuf {
        self.root.join(&self.config.project.export_dir)
    }
}
