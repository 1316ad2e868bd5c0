//! Delete command

use super::{person_at, CommandError, CommandResult};
use crate::domain::{AddressBook, Index};

/// Deletes the person at a visible index
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
        number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        let target = person_at(book, self.index)?;
        let removed = book.remove(&target)?;
        Ok(CommandResult::new(format!("Deleted Person: {}", removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::typical_book;
    use crate::domain::NameContainsKeywords;

    #[test]
    fn deletes_person_at_index() {
        let mut book = typical_book();
        let result = DeleteCommand::new(Index::from_zero_based(0))
            .execute(&mut book)
            .unwrap();

        assert!(result.feedback.starts_with("Deleted Person: Alice Pauline"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn index_refers_to_filtered_list() {
        let mut book = typical_book();
        book.set_filter(Some(NameContainsKeywords::new(vec!["Carl".into()])));

        assert!(DeleteCommand::new(Index::from_zero_based(1))
            .execute(&mut book)
            .is_err());

        let result = DeleteCommand::new(Index::from_zero_based(0))
            .execute(&mut book)
            .unwrap();
        assert!(result.feedback.contains("Carl Kurz"));
        assert_eq!(book.len(), 2);
    }
}
