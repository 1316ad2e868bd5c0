//! Parser for `add`

use super::error::ParseError;
use super::field::{
    parse_address, parse_email, parse_github_id, parse_name, parse_nus_network_id, parse_phone,
    parse_student_id, parse_tags, parse_tutorial_id, parse_type,
};
use super::tokenizer::{
    tokenize, PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_GITHUB_ID, PREFIX_NAME,
    PREFIX_NUS_NETWORK_ID, PREFIX_PHONE, PREFIX_STUDENT_ID, PREFIX_TAG, PREFIX_TUTORIAL_ID,
    PREFIX_TYPE, SINGLE_VALUED_PREFIXES,
};
use super::CommandParser;
use crate::command::AddCommand;
use crate::domain::Person;

pub struct AddCommandParser;

impl AddCommandParser {
    const REQUIRED: &'static [super::Prefix] = &[
        PREFIX_NAME,
        PREFIX_EMAIL,
        PREFIX_TYPE,
        PREFIX_GITHUB_ID,
        PREFIX_NUS_NETWORK_ID,
    ];
}

impl CommandParser for AddCommandParser {
    type Command = AddCommand;

    /// Structural problems (missing or repeated prefixes, stray preamble)
    /// report the usage text; an invalid field reports its own constraint.
    fn parse(&self, args: &str) -> Result<AddCommand, ParseError> {
        let map = tokenize(args, PERSON_PREFIXES);

        let all_required = Self::REQUIRED.iter().all(|&p| map.contains(p));
        if !all_required || !map.preamble().is_empty() {
            return Err(ParseError::usage(AddCommand::MESSAGE_USAGE));
        }
        if !map.duplicated(SINGLE_VALUED_PREFIXES).is_empty() {
            return Err(ParseError::usage(AddCommand::MESSAGE_USAGE));
        }

        let mut person = Person::new(
            parse_name(map.value(PREFIX_NAME))?,
            parse_email(map.value(PREFIX_EMAIL))?,
            parse_type(map.value(PREFIX_TYPE))?,
            parse_github_id(map.value(PREFIX_GITHUB_ID))?,
            parse_nus_network_id(map.value(PREFIX_NUS_NETWORK_ID))?,
        );
        person.phone = map.value(PREFIX_PHONE).map(|raw| parse_phone(raw)).transpose()?;
        person.address = map.value(PREFIX_ADDRESS).map(|raw| parse_address(raw)).transpose()?;
        person.student_id = map
            .value(PREFIX_STUDENT_ID)
            .map(|raw| parse_student_id(raw))
            .transpose()?;
        person.tutorial_id = map
            .value(PREFIX_TUTORIAL_ID)
            .map(|raw| parse_tutorial_id(raw))
            .transpose()?;
        person.tags = parse_tags(Some(map.all_values(PREFIX_TAG)))?;

        Ok(AddCommand::new(person))
    }
}
