//! In-memory person collection
//!
//! Persons are kept in insertion order. A filter narrows the view that
//! indices refer to; it is reset to "everyone" after each mutation that
//! could change membership.

use thiserror::Error;

use super::person::{NameContainsKeywords, Person};

#[derive(Debug, Error, PartialEq)]
pub enum AddressBookError {
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("Person not found")]
    PersonNotFound,
}

/// The roster of persons plus the current view filter
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    filter: Option<NameContainsKeywords>,
}

impl AddressBook {
    /// Creates an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an address book holding the given persons, unfiltered
    pub fn from_persons(persons: Vec<Person>) -> Self {
        Self {
            persons,
            filter: None,
        }
    }

    /// Returns all persons regardless of the filter
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the number of persons regardless of the filter
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns true if there are no persons
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns true if an equivalent person already exists
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Adds a person, rejecting duplicates
    pub fn add(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited`
    ///
    /// Fails if `target` is absent, or if `edited` would collide with a
    /// different existing person.
    pub fn set(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(AddressBookError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(AddressBookError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Removes a person
    pub fn remove(&mut self, target: &Person) -> Result<Person, AddressBookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(AddressBookError::PersonNotFound)?;
        Ok(self.persons.remove(position))
    }

    /// Removes everyone and clears the filter
    pub fn clear(&mut self) {
        self.persons.clear();
        self.filter = None;
    }

    /// Narrows the visible list, or shows everyone when `None`
    pub fn set_filter(&mut self, filter: Option<NameContainsKeywords>) {
        self.filter = filter;
    }

    /// Returns the persons currently visible, in order
    pub fn filtered(&self) -> Vec<&Person> {
        match &self.filter {
            Some(filter) => self.persons.iter().filter(|p| filter.matches(p)).collect(),
            None => self.persons.iter().collect(),
        }
    }
}
