//! Command word lookup

use super::add::AddCommandParser;
use super::delete::DeleteCommandParser;
use super::edit::EditCommandParser;
use super::error::{ParseError, MESSAGE_UNKNOWN_COMMAND};
use super::export::ExportCommandParser;
use super::field::trim_arg;
use super::find::FindCommandParser;
use super::CommandParser;
use crate::command::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, ExportCommand,
    FindCommand, HelpCommand, ListCommand,
};

/// Parses one line of user input into a command
///
/// The first word picks the command. Everything after it, leading
/// whitespace included, goes to that command's parser so prefixes right
/// after the word are still recognized.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = trim_arg(input);
    let (word, args) = match input.find(char::is_whitespace) {
        Some(split) => input.split_at(split),
        None => (input, ""),
    };

    if word.is_empty() {
        return Err(ParseError::usage(HelpCommand::MESSAGE_USAGE));
    }

    let command = match word {
        AddCommand::COMMAND_WORD => Command::Add(AddCommandParser.parse(args)?),
        EditCommand::COMMAND_WORD => Command::Edit(EditCommandParser.parse(args)?),
        DeleteCommand::COMMAND_WORD => Command::Delete(DeleteCommandParser.parse(args)?),
        FindCommand::COMMAND_WORD => Command::Find(FindCommandParser.parse(args)?),
        ExportCommand::COMMAND_WORD => Command::Export(ExportCommandParser.parse(args)?),
        ListCommand::COMMAND_WORD => Command::List(ListCommand),
        ClearCommand::COMMAND_WORD => Command::Clear(ClearCommand),
        HelpCommand::COMMAND_WORD => Command::Help(HelpCommand),
        ExitCommand::COMMAND_WORD => Command::Exit(ExitCommand),
        _ => return Err(ParseError::invalid(MESSAGE_UNKNOWN_COMMAND)),
    };

    Ok(command)
}
