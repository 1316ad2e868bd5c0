//! # Parsing
//!
//! Turns one line of user input into a [`Command`](crate::command::Command).
//!
//! Arguments are introduced by prefixes such as `n/` or `t/`:
//!
//! ```text
//! add n/John Doe e/john@example.com ty/student g/johndoe nn/e0123456 t/friend
//! edit 2 p/91234567 t/
//! ```
//!
//! Each field value is validated by its domain type, so an invalid value
//! reports that type's constraint message. Structural problems (a missing
//! prefix, a bad index) report the command's usage text instead.

mod add;
mod delete;
mod dispatch;
mod edit;
mod error;
mod export;
mod field;
mod find;
mod tokenizer;

pub use add::AddCommandParser;
pub use delete::DeleteCommandParser;
pub use dispatch::parse_command;
pub use edit::EditCommandParser;
pub use error::{ParseError, MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_UNKNOWN_COMMAND};
pub use export::ExportCommandParser;
pub use field::{
    parse_address, parse_email, parse_file_path, parse_github_id, parse_index, parse_name,
    parse_nus_network_id, parse_phone, parse_student_id, parse_tag, parse_tags,
    parse_tutorial_id, parse_type, MESSAGE_INVALID_FILE_PATH, MESSAGE_INVALID_INDEX,
};
pub use find::FindCommandParser;
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

/// Parses the arguments that follow a command word
pub trait CommandParser {
    type Command;

    fn parse(&self, args: &str) -> Result<Self::Command, ParseError>;
}
