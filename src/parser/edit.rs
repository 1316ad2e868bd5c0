//! Parser for `edit`

use std::collections::BTreeSet;

use super::error::ParseError;
use super::field::{
    parse_address, parse_email, parse_github_id, parse_index, parse_name, parse_nus_network_id,
    parse_phone, parse_student_id, parse_tags, parse_tutorial_id, parse_type,
};
use super::tokenizer::{
    tokenize, ArgumentMultimap, PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_GITHUB_ID,
    PREFIX_NAME, PREFIX_NUS_NETWORK_ID, PREFIX_PHONE, PREFIX_STUDENT_ID, PREFIX_TAG,
    PREFIX_TUTORIAL_ID, PREFIX_TYPE, SINGLE_VALUED_PREFIXES,
};
use super::CommandParser;
use crate::command::{EditCommand, EditPersonDescriptor, MESSAGE_NOT_EDITED};
use crate::domain::Tag;

pub struct EditCommandParser;

impl CommandParser for EditCommandParser {
    type Command = EditCommand;

    fn parse(&self, args: &str) -> Result<EditCommand, ParseError> {
        let map = tokenize(args, PERSON_PREFIXES);

        let index = parse_index(map.preamble())
            .map_err(|_| ParseError::usage(EditCommand::MESSAGE_USAGE))?;

        if !map.duplicated(SINGLE_VALUED_PREFIXES).is_empty() {
            return Err(ParseError::usage(EditCommand::MESSAGE_USAGE));
        }

        let descriptor = EditPersonDescriptor {
            name: map.value(PREFIX_NAME).map(|raw| parse_name(raw)).transpose()?,
            email: map.value(PREFIX_EMAIL).map(|raw| parse_email(raw)).transpose()?,
            person_type: map.value(PREFIX_TYPE).map(|raw| parse_type(raw)).transpose()?,
            github_id: map
                .value(PREFIX_GITHUB_ID)
                .map(|raw| parse_github_id(raw))
                .transpose()?,
            nus_network_id: map
                .value(PREFIX_NUS_NETWORK_ID)
                .map(|raw| parse_nus_network_id(raw))
                .transpose()?,
            phone: map.value(PREFIX_PHONE).map(|raw| parse_phone(raw)).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(|raw| parse_address(raw)).transpose()?,
            student_id: map
                .value(PREFIX_STUDENT_ID)
                .map(|raw| parse_student_id(raw))
                .transpose()?,
            tutorial_id: map
                .value(PREFIX_TUTORIAL_ID)
                .map(|raw| parse_tutorial_id(raw))
                .transpose()?,
            tags: parse_tags_for_edit(&map)?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::invalid(MESSAGE_NOT_EDITED));
        }

        Ok(EditCommand::new(index, descriptor))
    }
}

/// Tags to replace, if any `t/` was given
///
/// A lone empty `t/` means "remove all tags".
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    if !map.contains(PREFIX_TAG) {
        return Ok(None);
    }

    let values = map.all_values(PREFIX_TAG);
    if values == [""] {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(Some(values)).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Index, Name, Phone, ValueObject};

    fn usage_error() -> ParseError {
        ParseError::usage(EditCommand::MESSAGE_USAGE)
    }

    #[test]
    fn missing_parts() {
        // no index
        assert_eq!(EditCommandParser.parse(" n/Amy"), Err(usage_error()));
        // no field
        assert_eq!(
            EditCommandParser.parse(" 1"),
            Err(ParseError::invalid(MESSAGE_NOT_EDITED))
        );
        // nothing at all
        assert_eq!(EditCommandParser.parse(""), Err(usage_error()));
    }

    #[test]
    fn invalid_preamble() {
        assert_eq!(EditCommandParser.parse(" -5 n/Amy"), Err(usage_error()));
        assert_eq!(EditCommandParser.parse(" 0 n/Amy"), Err(usage_error()));
        assert_eq!(EditCommandParser.parse(" 1 some random string"), Err(usage_error()));
        assert_eq!(EditCommandParser.parse(" 1 i/ string"), Err(usage_error()));
    }

    #[test]
    fn invalid_value_reports_constraint() {
        assert_eq!(
            EditCommandParser.parse(" 1 n/James&"),
            Err(ParseError::invalid(Name::MESSAGE_CONSTRAINTS))
        );
        assert_eq!(
            EditCommandParser.parse(" 1 p/abc"),
            Err(ParseError::invalid(Phone::MESSAGE_CONSTRAINTS))
        );
        assert_eq!(
            EditCommandParser.parse(" 1 t/friend t/#x"),
            Err(ParseError::invalid(Tag::MESSAGE_CONSTRAINTS))
        );
    }

    #[test]
    fn some_fields_specified() {
        let cmd = EditCommandParser
            .parse(" 2 p/91234567 e/amy@example.com")
            .unwrap();

        assert_eq!(cmd.index, Index::from_zero_based(1));
        assert_eq!(cmd.descriptor.phone, Some(Phone::new("91234567").unwrap()));
        assert_eq!(cmd.descriptor.email, Some(Email::new("amy@example.com").unwrap()));
        assert!(cmd.descriptor.name.is_none());
        assert!(cmd.descriptor.tags.is_none());
    }

    #[test]
    fn repeated_single_valued_prefix_reports_usage() {
        assert_eq!(
            EditCommandParser.parse(" 1 p/91234567 p/98765432"),
            Err(usage_error())
        );
    }

    #[test]
    fn empty_tag_clears_tags() {
        let cmd = EditCommandParser.parse(" 3 t/").unwrap();
        assert_eq!(cmd.descriptor.tags, Some(BTreeSet::new()));
    }

    #[test]
    fn empty_tag_among_others_is_invalid() {
        assert_eq!(
            EditCommandParser.parse(" 3 t/friend t/"),
            Err(ParseError::invalid(Tag::MESSAGE_CONSTRAINTS))
        );
    }
}
