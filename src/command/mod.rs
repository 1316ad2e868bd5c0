//! # Commands
//!
//! Executable commands produced by the parsers in [`crate::parser`].
//!
//! | Word | Effect |
//! |------|--------|
//! | `add` | Adds a person |
//! | `edit` | Edits the person at an index |
//! | `delete` | Deletes the person at an index |
//! | `find` | Filters the list by name keywords |
//! | `list` | Shows everyone |
//! | `clear` | Removes everyone |
//! | `export` | Writes the visible list to a JSON file |
//! | `help` | Shows command usage |
//! | `exit` | Leaves the shell |
//!
//! Indices refer to the currently visible (filtered) list and are checked
//! against its size here, not while parsing.

mod add;
mod edit;
mod delete;
mod find;
mod export;
mod general;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{AddressBook, AddressBookError, Index, Person};

pub use add::AddCommand;
pub use edit::{EditCommand, EditPersonDescriptor, MESSAGE_NOT_EDITED};
pub use delete::DeleteCommand;
pub use find::FindCommand;
pub use export::ExportCommand;
pub use general::{ClearCommand, ExitCommand, HelpCommand, ListCommand};

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidIndex,

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),

    #[error("Could not write export file {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,

    /// True if the shell should stop after this command
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// A parsed command, ready to run against an address book
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Export(ExportCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Runs the command
    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(book),
            Command::Edit(cmd) => cmd.execute(book),
            Command::Delete(cmd) => cmd.execute(book),
            Command::Find(cmd) => Ok(cmd.execute(book)),
            Command::List(cmd) => Ok(cmd.execute(book)),
            Command::Clear(cmd) => Ok(cmd.execute(book)),
            Command::Export(cmd) => cmd.execute(book),
            Command::Help(cmd) => Ok(cmd.execute()),
            Command::Exit(cmd) => Ok(cmd.execute()),
        }
    }

    /// Returns true if running this command changes the stored records
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(_) | Command::Delete(_) | Command::Clear(_)
        )
    }
}

/// Looks up the visible person at `index`
fn person_at(book: &AddressBook, index: Index) -> Result<Person, CommandError> {
    book.filtered()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or(CommandError::InvalidIndex)
}

/// Formats the "N persons listed!" overview
pub fn persons_listed(count: usize) -> String {
    format!("{} {}", count, MESSAGE_PERSONS_LISTED_OVERVIEW)
}
