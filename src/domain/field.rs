//! Self-validating field values
//!
//! Every field of a person record is wrapped in a type that can only be
//! constructed from a string that satisfies the field's pattern. Values are
//! stored verbatim: trimming is the parser's job, not the field's.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// No value was supplied at all (distinct from a blank value)
    #[error("{field} must not be null")]
    Null { field: &'static str },

    /// A value was supplied but violates the field's constraints
    #[error("{0}")]
    Illegal(&'static str),
}

/// A validated, immutable wrapper around a string
///
/// Implementors guarantee that `is_valid(v.value())` holds for every value
/// `v` that `new` hands out.
pub trait ValueObject: Sized {
    /// Field name used in null-argument errors
    const FIELD: &'static str;

    /// Human-readable description of the accepted format
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Returns true if `test` is an acceptable value for this field
    fn is_valid(test: &str) -> bool;

    /// Validates and wraps `raw`
    ///
    /// `None` fails with [`FieldError::Null`]; a string rejected by
    /// [`ValueObject::is_valid`] fails with [`FieldError::Illegal`].
    fn new<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, FieldError>;

    /// Returns the stored value
    fn value(&self) -> &str;
}

/// Checks `raw` against a field's contract, returning the accepted string
pub(crate) fn check<'a>(
    raw: Option<&'a str>,
    field: &'static str,
    constraints: &'static str,
    is_valid: fn(&str) -> bool,
) -> Result<&'a str, FieldError> {
    let raw = raw.ok_or(FieldError::Null { field })?;
    if !is_valid(raw) {
        return Err(FieldError::Illegal(constraints));
    }
    Ok(raw)
}

/// Declares a string-backed value object validated by a regular expression
///
/// The pattern must be anchored at both ends.
macro_rules! value_object {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            constraints: $constraints:expr,
            pattern: $pattern:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $crate::domain::ValueObject for $name {
            const FIELD: &'static str = $field;
            const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            fn is_valid(test: &str) -> bool {
                static PATTERN: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
                    regex::Regex::new($pattern).expect("static regex must compile")
                });
                PATTERN.is_match(test)
            }

            fn new<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, $crate::domain::FieldError> {
                let raw = $crate::domain::field::check(
                    raw.into(),
                    Self::FIELD,
                    Self::MESSAGE_CONSTRAINTS,
                    <Self as $crate::domain::ValueObject>::is_valid,
                )?;
                Ok(Self(raw.to_string()))
            }

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::ValueObject>::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use value_object;
