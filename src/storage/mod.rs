//! # Storage Layer
//!
//! Persistence for Roster using plain, diff-friendly files.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Persons | JSONL (one JSON object per line) | `.roster/people.jsonl` |
//! | Config | TOML | `.roster/config.toml` |
//! | Global config | TOML | `~/.config/roster-cli/config.toml` |
//!
//! [`PersonStore`] takes `fs2` file locks and rewrites through a temp file
//! plus rename, so a crash mid-save leaves the previous file intact.

mod config;
mod jsonl;
mod workspace;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, WORKSPACE_DIR};
pub use jsonl::PersonStore;
pub use workspace::{Workspace, WorkspaceError};
