//! Add command

use super::{CommandError, CommandResult};
use crate::domain::{AddressBook, Person};

/// Adds a fully-validated person
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the roster. \
        Parameters: n/NAME e/EMAIL ty/TYPE g/GITHUB_ID nn/NUS_NETWORK_ID \
        [p/PHONE] [a/ADDRESS] [s/STUDENT_ID] [tut/TUTORIAL_ID] [t/TAG]...\n\
        Example: add n/John Doe e/johnd@example.com ty/student g/johndoe nn/e0123456 \
        s/A0123456X tut/11 t/friends";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        book.add(self.person.clone())?;
        book.set_filter(None);
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::{person, typical_book};
    use crate::domain::AddressBookError;

    #[test]
    fn adds_new_person() {
        let mut book = typical_book();
        let result = AddCommand::new(person("Daniel Meier", "e0000004"))
            .execute(&mut book)
            .unwrap();

        assert!(result.feedback.starts_with("New person added: Daniel Meier"));
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn rejects_duplicate_person() {
        let mut book = typical_book();
        let err = AddCommand::new(person("Someone Else", "e0000001"))
            .execute(&mut book)
            .unwrap_err();

        assert!(matches!(
            err,
            CommandError::AddressBook(AddressBookError::DuplicatePerson)
        ));
        assert_eq!(err.to_string(), "This person already exists in the address book");
    }
}
