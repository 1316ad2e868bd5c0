//! Find command

use super::{persons_listed, CommandResult};
use crate::domain::{AddressBook, NameContainsKeywords};

/// Shows persons whose names contain any of the keywords
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    pub predicate: NameContainsKeywords,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(predicate: NameContainsKeywords) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, book: &mut AddressBook) -> CommandResult {
        book.set_filter(Some(self.predicate.clone()));
        CommandResult::new(persons_listed(book.filtered().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::typical_book;

    #[test]
    fn filters_by_keywords() {
        let mut book = typical_book();
        let keywords = vec!["kurz".to_string(), "meier".to_string()];
        let result = FindCommand::new(NameContainsKeywords::new(keywords)).execute(&mut book);

        assert_eq!(result.feedback, "2 persons listed!");
        assert_eq!(book.filtered().len(), 2);
    }

    #[test]
    fn no_match_lists_nobody() {
        let mut book = typical_book();
        let result =
            FindCommand::new(NameContainsKeywords::new(vec!["zed".into()])).execute(&mut book);
        assert_eq!(result.feedback, "0 persons listed!");
    }
}
