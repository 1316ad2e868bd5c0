//! Edit command

use std::collections::BTreeSet;

use super::{person_at, CommandError, CommandResult};
use crate::domain::{
    Address, AddressBook, Email, GitHubId, Index, Name, NusNetworkId, Person, PersonType, Phone,
    StudentId, Tag, TutorialId,
};

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Fields to overwrite on an existing person
///
/// `None` leaves the field untouched. `tags: Some(empty)` clears all tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub email: Option<Email>,
    pub person_type: Option<PersonType>,
    pub github_id: Option<GitHubId>,
    pub nus_network_id: Option<NusNetworkId>,
    pub phone: Option<Phone>,
    pub address: Option<Address>,
    pub student_id: Option<StudentId>,
    pub tutorial_id: Option<TutorialId>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    /// Returns true if at least one field would change
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.person_type.is_some()
            || self.github_id.is_some()
            || self.nus_network_id.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.student_id.is_some()
            || self.tutorial_id.is_some()
            || self.tags.is_some()
    }

    /// Returns a copy of `person` with the described fields replaced
    pub fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(email) = &self.email {
            edited.email = email.clone();
        }
        if let Some(person_type) = self.person_type {
            edited.person_type = person_type;
        }
        if let Some(github_id) = &self.github_id {
            edited.github_id = github_id.clone();
        }
        if let Some(nus_network_id) = &self.nus_network_id {
            edited.nus_network_id = nus_network_id.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = Some(phone.clone());
        }
        if let Some(address) = &self.address {
            edited.address = Some(address.clone());
        }
        if let Some(student_id) = &self.student_id {
            edited.student_id = Some(student_id.clone());
        }
        if let Some(tutorial_id) = &self.tutorial_id {
            edited.tutorial_id = Some(tutorial_id.clone());
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

/// Edits the person at a visible index
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified \
        by the index number used in the displayed person list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) \
        [n/NAME] [e/EMAIL] [ty/TYPE] [g/GITHUB_ID] [nn/NUS_NETWORK_ID] \
        [p/PHONE] [a/ADDRESS] [s/STUDENT_ID] [tut/TUTORIAL_ID] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        let target = person_at(book, self.index)?;
        let edited = self.descriptor.apply(&target);

        book.set(&target, edited.clone())?;
        book.set_filter(None);
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
    }
}
