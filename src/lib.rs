//! Roster - a contact roster for teaching teams
//!
//! Records students and staff with their GitHub and network IDs and is
//! driven by short prefixed commands such as
//! `add n/Amy Bee e/amy@example.com ty/student g/amy-bee nn/e1234567`.
//! Every field is validated on entry and again when records are loaded.

pub mod domain;
pub mod parser;
pub mod command;
pub mod storage;
pub mod cli;

pub use command::{Command, CommandError, CommandResult};
pub use domain::{AddressBook, Person};
pub use parser::{parse_command, ParseError};
