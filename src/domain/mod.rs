//! Domain models for Roster
//!
//! Validated field values, persons, and the in-memory address book.
//! Contains no I/O.

mod field;
mod fields;
mod index;
mod person;
mod address_book;

pub use field::{FieldError, ValueObject};
pub use fields::{
    Address, Email, GitHubId, Name, NusNetworkId, PersonType, Phone, StudentId, Tag, TutorialId,
};
pub use index::Index;
pub use person::{NameContainsKeywords, Person};
pub use address_book::{AddressBook, AddressBookError};
