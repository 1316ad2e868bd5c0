//! Roster - contact roster for teaching teams

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = roster_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
