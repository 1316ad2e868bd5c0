//! A loaded address book bound to its workspace

use anyhow::Result;

use super::output::{Output, Report};
use crate::command::{Command, CommandResult};
use crate::domain::AddressBook;
use crate::parser::parse_command;
use crate::storage::{PersonStore, Workspace};

pub struct Session {
    workspace: Workspace,
    store: PersonStore,
    book: AddressBook,
}

impl Session {
    /// Loads the workspace's person records
    pub fn open(workspace: Workspace) -> Result<Self> {
        let store = workspace.person_store();
        let book = store.load()?;
        Ok(Self {
            workspace,
            store,
            book,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parses and runs one command line, saving if it changed anything
    pub fn execute(&mut self, line: &str) -> Result<(Command, CommandResult)> {
        let mut command = parse_command(line)?;

        if let Command::Export(export) = &mut command {
            export.resolve_against(&self.workspace.export_dir());
        }

        let snapshot = command.mutates().then(|| self.book.clone());
        let result = command.execute(&mut self.book)?;

        if let Some(snapshot) = snapshot {
            if let Err(e) = self.store.save(&self.book) {
                // keep memory in step with the file so a later save can't
                // write a change reported as failed
                self.book = snapshot;
                return Err(e.context("Change not applied; the address book is unchanged"));
            }
        }

        Ok((command, result))
    }

    /// Runs one command line and prints the outcome
    pub fn run_line(&mut self, line: &str, output: &Output) -> Result<CommandResult> {
        output.verbose_ctx("exec", &format!("Running: {}", line.trim()));
        let (command, result) = self.execute(line)?;

        if command.mutates() {
            output.verbose_ctx(
                "exec",
                &format!("Saved {} person(s) to {}", self.book.len(), self.store.path().display()),
            );
        }

        let persons = matches!(command, Command::List(_) | Command::Find(_))
            .then(|| self.book.filtered());
        output.report(&Report {
            result: &result,
            persons,
        });

        Ok(result)
    }
}
