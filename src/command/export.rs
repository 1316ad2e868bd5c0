//! Export command
//!
//! Writes the visible person list as pretty-printed JSON.

use std::fs;
use std::path::{Path, PathBuf};

use super::{CommandError, CommandResult};
use crate::domain::AddressBook;

/// Exports the visible persons to a JSON file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportCommand {
    pub path: PathBuf,
}

impl ExportCommand {
    pub const COMMAND_WORD: &'static str = "export";

    pub const MESSAGE_USAGE: &'static str = "export: Exports the displayed person list to a \
        JSON file.\n\
        Parameters: FILE_PATH (must end in .json)\n\
        Example: export exports/tutorial11.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Places a relative export path under `base`; absolute paths are kept
    pub fn resolve_against(&mut self, base: &Path) {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
    }

    pub fn execute(&self, book: &AddressBook) -> Result<CommandResult, CommandError> {
        let persons = book.filtered();
        self.write(&persons).map_err(|source| CommandError::Export {
            path: self.path.clone(),
            source,
        })?;

        Ok(CommandResult::new(format!(
            "Exported {} person(s) to {}",
            persons.len(),
            self.path.display()
        )))
    }

    fn write<T: serde::Serialize>(&self, data: &T) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::typical_book;
    use crate::domain::Person;
    use tempfile::TempDir;

    #[test]
    fn writes_visible_persons_as_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("roster.json");
        let book = typical_book();

        let result = ExportCommand::new(&path).execute(&book).unwrap();
        assert!(result.feedback.starts_with("Exported 3 person(s)"));

        let content = fs::read_to_string(&path).unwrap();
        let persons: Vec<Person> = serde_json::from_str(&content).unwrap();
        assert_eq!(persons, book.persons());
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let dir = TempDir::new().unwrap();

        let mut relative = ExportCommand::new("roster.json");
        relative.resolve_against(dir.path());
        assert_eq!(relative.path, dir.path().join("roster.json"));

        let absolute_path = dir.path().join("abs.json");
        let mut absolute = ExportCommand::new(&absolute_path);
        absolute.resolve_against(Path::new("/elsewhere"));
        assert_eq!(absolute.path, absolute_path);
    }

    #[test]
    fn unwritable_path_reports_export_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = ExportCommand::new(blocker.join("roster.json"))
            .execute(&typical_book())
            .unwrap_err();
        assert!(matches!(err, CommandError::Export { .. }));
    }
}
