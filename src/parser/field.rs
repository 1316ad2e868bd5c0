//! Field parsing
//!
//! Bridges raw, possibly padded argument strings and validated field
//! values. Every parser trims its input before validating; the field types
//! themselves never trim.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::error::ParseError;
use crate::domain::{
    Address, Email, GitHubId, Index, Name, NusNetworkId, PersonType, Phone, StudentId, Tag,
    TutorialId, ValueObject,
};

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_FILE_PATH: &str = "File path should be a non-blank path to a .json file";

/// Strips leading and trailing spaces and ASCII control characters
///
/// Other Unicode whitespace, such as a no-break space, is kept and left for
/// the field to reject.
pub(crate) fn trim_arg(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Parses a one-based index
///
/// Only plain decimal digits are accepted (no sign), and the value must be
/// between 1 and `i32::MAX`. Bounds against the list are checked later.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = trim_arg(raw);
    if trimmed.starts_with('+') {
        return Err(ParseError::invalid(MESSAGE_INVALID_INDEX));
    }

    trimmed
        .parse::<i32>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(NonZeroUsize::new)
        .map(Index::from_one_based)
        .ok_or_else(|| ParseError::invalid(MESSAGE_INVALID_INDEX))
}

/// Trims `raw` and validates it as a `T`
fn parse_field<T: ValueObject>(raw: Option<&str>) -> Result<T, ParseError> {
    let raw = raw.ok_or(ParseError::NullArgument { field: T::FIELD })?;
    Ok(T::new(trim_arg(raw))?)
}

pub fn parse_name<'a>(raw: impl Into<Option<&'a str>>) -> Result<Name, ParseError> {
    parse_field(raw.into())
}

pub fn parse_phone<'a>(raw: impl Into<Option<&'a str>>) -> Result<Phone, ParseError> {
    parse_field(raw.into())
}

pub fn parse_address<'a>(raw: impl Into<Option<&'a str>>) -> Result<Address, ParseError> {
    parse_field(raw.into())
}

pub fn parse_email<'a>(raw: impl Into<Option<&'a str>>) -> Result<Email, ParseError> {
    parse_field(raw.into())
}

pub fn parse_tag<'a>(raw: impl Into<Option<&'a str>>) -> Result<Tag, ParseError> {
    parse_field(raw.into())
}

pub fn parse_github_id<'a>(raw: impl Into<Option<&'a str>>) -> Result<GitHubId, ParseError> {
    parse_field(raw.into())
}

pub fn parse_nus_network_id<'a>(
    raw: impl Into<Option<&'a str>>,
) -> Result<NusNetworkId, ParseError> {
    parse_field(raw.into())
}

pub fn parse_type<'a>(raw: impl Into<Option<&'a str>>) -> Result<PersonType, ParseError> {
    parse_field(raw.into())
}

pub fn parse_student_id<'a>(raw: impl Into<Option<&'a str>>) -> Result<StudentId, ParseError> {
    parse_field(raw.into())
}

pub fn parse_tutorial_id<'a>(raw: impl Into<Option<&'a str>>) -> Result<TutorialId, ParseError> {
    parse_field(raw.into())
}

/// Parses every element as a tag
///
/// One invalid element fails the whole collection. Duplicates collapse.
pub fn parse_tags<I, S>(raw: Option<I>) -> Result<BTreeSet<Tag>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw = raw.ok_or(ParseError::NullArgument { field: Tag::FIELD })?;
    raw.into_iter().map(|tag| parse_tag(tag.as_ref())).collect()
}

/// Parses an export destination
///
/// The path must be non-blank, free of NUL bytes, name a file, and carry a
/// `.json` extension.
pub fn parse_file_path(raw: &str) -> Result<PathBuf, ParseError> {
    let trimmed = trim_arg(raw);
    if trimmed.is_empty() || trimmed.contains('\0') {
        return Err(ParseError::invalid(MESSAGE_INVALID_FILE_PATH));
    }

    let path = PathBuf::from(trimmed);
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if path.file_name().is_none() || !is_json {
        return Err(ParseError::invalid(MESSAGE_INVALID_FILE_PATH));
    }

    Ok(path)
}
