//! Line-by-line command loop
//!
//! Reads commands until `exit` or end of input. A failing command is
//! reported and the loop carries on.

use std::io::BufRead;

use anyhow::{Context, Result};

use super::output::Output;
use super::session::Session;

/// Runs commands read from `input`, returning how many failed
pub fn run<R: BufRead>(session: &mut Session, input: R, output: &Output) -> Result<usize> {
    let mut failures = 0;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match session.run_line(&line, output) {
            Ok(result) if result.exit => break,
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                output.error(&format!("{:#}", e));
            }
        }
    }

    output.verbose_ctx("shell", &format!("Finished with {} failed command(s)", failures));
    Ok(failures)
}
