//! Parser for `find`

use super::error::ParseError;
use super::CommandParser;
use crate::command::FindCommand;
use crate::domain::NameContainsKeywords;

pub struct FindCommandParser;

impl CommandParser for FindCommandParser {
    type Command = FindCommand;

    fn parse(&self, args: &str) -> Result<FindCommand, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::usage(FindCommand::MESSAGE_USAGE));
        }
        Ok(FindCommand::new(NameContainsKeywords::new(keywords)))
    }
}
