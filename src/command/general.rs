//! Commands that take no arguments

use super::{
    persons_listed, AddCommand, CommandResult, DeleteCommand, EditCommand, ExportCommand,
    FindCommand,
};
use crate::domain::AddressBook;

/// Shows every person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all persons.";

    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        book.set_filter(None);
        CommandResult::new(format!("Listed all persons ({})", persons_listed(book.len())))
    }
}

/// Removes every person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str = "clear: Removes all persons from the roster.";

    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        book.clear();
        CommandResult::new("Roster has been cleared!")
    }
}

/// Shows usage for every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";

    pub fn execute(&self) -> CommandResult {
        let usages = [
            AddCommand::MESSAGE_USAGE,
            EditCommand::MESSAGE_USAGE,
            DeleteCommand::MESSAGE_USAGE,
            FindCommand::MESSAGE_USAGE,
            ListCommand::MESSAGE_USAGE,
            ClearCommand::MESSAGE_USAGE,
            ExportCommand::MESSAGE_USAGE,
            HelpCommand::MESSAGE_USAGE,
            ExitCommand::MESSAGE_USAGE,
        ];
        CommandResult::new(usages.join("\n\n"))
    }
}

/// Ends the interactive shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.";

    pub fn execute(&self) -> CommandResult {
        CommandResult::exiting("Exiting roster as requested ...")
    }
}
