//! Prefix tokenizer
//!
//! Splits an argument string like `1 n/John Doe t/friend t/tutor` into a
//! preamble (`1`) and per-prefix values. A prefix only counts when it is
//! preceded by whitespace, so `nn/` never matches inside `n/` values and
//! `t/` never matches inside `tut/`.

use std::collections::HashMap;
use std::fmt;

use super::field::trim_arg;

/// A marker such as `n/` that introduces an argument value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TYPE: Prefix = Prefix::new("ty/");
pub const PREFIX_GITHUB_ID: Prefix = Prefix::new("g/");
pub const PREFIX_NUS_NETWORK_ID: Prefix = Prefix::new("nn/");
pub const PREFIX_STUDENT_ID: Prefix = Prefix::new("s/");
pub const PREFIX_TUTORIAL_ID: Prefix = Prefix::new("tut/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Every person field prefix, in display order
pub const PERSON_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_EMAIL,
    PREFIX_TYPE,
    PREFIX_GITHUB_ID,
    PREFIX_NUS_NETWORK_ID,
    PREFIX_PHONE,
    PREFIX_ADDRESS,
    PREFIX_STUDENT_ID,
    PREFIX_TUTORIAL_ID,
    PREFIX_TAG,
];

/// Prefixes that may appear at most once
pub const SINGLE_VALUED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_EMAIL,
    PREFIX_TYPE,
    PREFIX_GITHUB_ID,
    PREFIX_NUS_NETWORK_ID,
    PREFIX_PHONE,
    PREFIX_ADDRESS,
    PREFIX_STUDENT_ID,
    PREFIX_TUTORIAL_ID,
];

/// Tokenized arguments: the preamble plus every value per prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the trimmed text before the first prefix
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true if `prefix` appeared at least once
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Returns the prefixes from `prefixes` that appeared more than once
    pub fn duplicated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|p| self.values.get(p).is_some_and(|v| v.len() > 1))
            .collect()
    }
}

/// Splits `args` on the given prefixes
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            find_prefix_positions(args, prefix)
                .into_iter()
                .map(move |start| (start, prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(args.len());
    let mut map = ArgumentMultimap {
        preamble: trim_arg(&args[..preamble_end]).to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());

        map.values
            .entry(*prefix)
            .or_default()
            .push(trim_arg(&args[value_start..value_end]).to_string());
    }

    map
}

/// Byte offsets of each occurrence of `prefix` that follows whitespace
fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<usize> {
    args.match_indices(prefix.as_str())
        .filter(|(start, _)| {
            args[..*start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
        .map(|(start, _)| start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_TAG, PREFIX_NUS_NETWORK_ID, PREFIX_TUTORIAL_ID];

    #[test]
    fn empty_args_have_empty_preamble_and_no_values() {
        let map = tokenize("", PREFIXES);
        assert_eq!(map.preamble(), "");
        assert!(!map.contains(PREFIX_NAME));
        assert_eq!(map.value(PREFIX_NAME), None);
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn no_prefixes_puts_everything_in_preamble() {
        let map = tokenize("  some random string /t tag with leading and trailing spaces ", PREFIXES);
        assert_eq!(
            map.preamble(),
            "some random string /t tag with leading and trailing spaces"
        );
        assert!(!map.contains(PREFIX_TAG));
    }

    #[test]
    fn values_are_trimmed_and_split_at_next_prefix() {
        let map = tokenize(" 1  n/ John Doe   t/friend t/tutor nn/e0123456", PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("John Doe"));
        assert_eq!(map.all_values(PREFIX_TAG), vec!["friend", "tutor"]);
        assert_eq!(map.value(PREFIX_TAG), Some("tutor"));
        assert_eq!(map.value(PREFIX_NUS_NETWORK_ID), Some("e0123456"));
    }

    #[test]
    fn prefix_must_follow_whitespace() {
        let map = tokenize(" n/Johnt/friend", PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("Johnt/friend"));
        assert!(!map.contains(PREFIX_TAG));

        // a prefix at the very start is part of the preamble
        let map = tokenize("n/John", PREFIXES);
        assert_eq!(map.preamble(), "n/John");
    }

    #[test]
    fn overlapping_prefixes_are_distinguished() {
        let map = tokenize(" tut/11 nn/e0000000 t/x", PREFIXES);
        assert_eq!(map.value(PREFIX_TUTORIAL_ID), Some("11"));
        assert_eq!(map.value(PREFIX_NUS_NETWORK_ID), Some("e0000000"));
        assert_eq!(map.all_values(PREFIX_TAG), vec!["x"]);
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn empty_value_is_recorded() {
        let map = tokenize(" 2 t/", PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), vec![""]);
    }

    #[test]
    fn whitespace_other_than_space_separates_prefixes() {
        let map = tokenize(" n/John\tt/friend", PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("John"));
        assert_eq!(map.value(PREFIX_TAG), Some("friend"));
    }

    #[test]
    fn duplicated_reports_repeated_prefixes_only() {
        let map = tokenize(" n/A n/B t/x t/y", PREFIXES);
        assert_eq!(map.duplicated(&[PREFIX_NAME, PREFIX_NUS_NETWORK_ID]), vec![PREFIX_NAME]);
        assert_eq!(map.value(PREFIX_NAME), Some("B"));
    }
}
