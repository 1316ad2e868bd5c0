//! Parser for `export`

use super::error::ParseError;
use super::field::parse_file_path;
use super::CommandParser;
use crate::command::ExportCommand;

pub struct ExportCommandParser;

impl CommandParser for ExportCommandParser {
    type Command = ExportCommand;

    fn parse(&self, args: &str) -> Result<ExportCommand, ParseError> {
        parse_file_path(args)
            .map(ExportCommand::new)
            .map_err(|_| ParseError::usage(ExportCommand::MESSAGE_USAGE))
    }
}
