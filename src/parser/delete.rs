//! Parser for `delete`

use super::error::ParseError;
use super::field::parse_index;
use super::CommandParser;
use crate::command::DeleteCommand;

pub struct DeleteCommandParser;

impl CommandParser for DeleteCommandParser {
    type Command = DeleteCommand;

    fn parse(&self, args: &str) -> Result<DeleteCommand, ParseError> {
        parse_index(args)
            .map(DeleteCommand::new)
            .map_err(|_| ParseError::usage(DeleteCommand::MESSAGE_USAGE))
    }
}
