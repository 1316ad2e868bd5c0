//! Person record fields
//!
//! Each pattern mirrors the accepted format exactly, in ASCII. Patterns are
//! full-match: a value is valid only if the whole string matches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::{check, value_object};
use super::{FieldError, ValueObject};

value_object! {
    /// A person's display name
    Name {
        field: "name",
        constraints: "Names should only contain alphanumeric characters and spaces, and it should not be blank",
        pattern: r"^[A-Za-z0-9][A-Za-z0-9 ]*$",
    }
}

value_object! {
    /// A phone number of at least three digits
    Phone {
        field: "phone",
        constraints: "Phone numbers should only contain numbers, and it should be at least 3 digits long",
        pattern: r"^[0-9]{3,}$",
    }
}

value_object! {
    /// A free-form postal address
    ///
    /// The first character may not be whitespace and no line terminators are
    /// allowed anywhere.
    Address {
        field: "address",
        constraints: "Addresses can take any values, and it should not be blank",
        pattern: r"^[^ \t\n\x0B\x0C\r][^\n\r\x{85}\x{2028}\x{2029}]*$",
    }
}

value_object! {
    /// An email address of the form `local-part@domain`
    Email {
        field: "email",
        constraints: "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
            1. The local-part should only contain alphanumeric characters and these special characters, excluding \
            the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
            2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
            separated by periods.\n\
            The domain name must:\n    \
            - end with a domain label at least 2 characters long\n    \
            - have each domain label start and end with alphanumeric characters\n    \
            - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.",
        pattern: r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*([A-Za-z0-9]+(-[A-Za-z0-9]+)*){2,}$",
    }
}

value_object! {
    /// A single-word label attached to a person
    Tag {
        field: "tag",
        constraints: "Tags names should be alphanumeric",
        pattern: r"^[A-Za-z0-9]+$",
    }
}

value_object! {
    /// A GitHub username
    ///
    /// Alphanumeric segments joined by single hyphens: no leading, trailing
    /// or doubled hyphens.
    GitHubId {
        field: "GitHub ID",
        constraints: "GitHub ID must be valid, and it should not be blank",
        pattern: r"^[a-zA-Z0-9]+(-[a-zA-Z0-9]+)*$",
    }
}

value_object! {
    /// A university network login, `e` or `E` followed by seven digits
    ///
    /// Equality is on the raw string, so `e0000000` and `E0000000` differ.
    NusNetworkId {
        field: "NUS Network ID",
        constraints: "NUS Network ID should start with 'e' or 'E' followed by exactly 7 digits, and it should not be blank",
        pattern: r"^[eE][0-9]{7}$",
    }
}

value_object! {
    /// A matriculation number: letter, seven digits, checksum letter
    StudentId {
        field: "student ID",
        constraints: "Student ID should be a letter, followed by 7 digits and a checksum letter (e.g. A0123456X)",
        pattern: r"^[A-Za-z][0-9]{7}[A-Za-z]$",
    }
}

value_object! {
    /// A two-digit tutorial group number
    TutorialId {
        field: "tutorial ID",
        constraints: "Tutorial ID should be a number with exactly 2 digits (e.g. 01 or 11)",
        pattern: r"^[0-9]{2}$",
    }
}

/// The role a person holds in the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PersonType {
    Student,
    Staff,
}

impl PersonType {
    /// Returns the canonical lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Student => "student",
            PersonType::Staff => "staff",
        }
    }
}

impl ValueObject for PersonType {
    const FIELD: &'static str = "type";
    const MESSAGE_CONSTRAINTS: &'static str = "Type should be either student or staff";

    fn is_valid(test: &str) -> bool {
        matches!(test, "student" | "staff")
    }

    fn new<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, FieldError> {
        let raw = check(
            raw.into(),
            Self::FIELD,
            Self::MESSAGE_CONSTRAINTS,
            <Self as ValueObject>::is_valid,
        )?;
        Ok(match raw {
            "student" => PersonType::Student,
            _ => PersonType::Staff,
        })
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueObject>::new(s)
    }
}

impl TryFrom<String> for PersonType {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonType> for String {
    fn from(value: PersonType) -> Self {
        value.as_str().to_string()
    }
}
