//! # Command-Line Interface
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `roster init [PATH]` | Create a `.roster/` workspace |
//! | `roster exec <COMMAND...>` | Run one command, e.g. `roster exec find alex` |
//! | `roster shell` | Run commands read from standard input |
//!
//! ## Output Formats
//!
//! `--format text` (default) prints feedback lines; `--format json` prints
//! one JSON object per command. The default can be set with
//! `default_format` in the global config.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! roster --verbose exec list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;
mod shell;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat, Report};
pub use session::Session;
