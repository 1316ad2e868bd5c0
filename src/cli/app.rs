//! Main CLI application structure

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::session::Session;
use super::shell;
use crate::storage::{Config, Workspace};

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Contact roster for teaching teams")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true, env = "ROSTER_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new roster workspace
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Run a single command, e.g. `roster exec add n/Amy ...`
    Exec {
        /// The command line, word by word
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Read commands from standard input until `exit` or end of input
    Shell,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.format {
        Some(format) => format,
        None => Config::load_global()?.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);

    output.verbose("Roster starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing workspace at: {}", path));
            let workspace = Workspace::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Created directory: {}", workspace.roster_dir().display()),
            );
            output.success(&format!(
                "Initialized roster workspace at {}",
                workspace.root().display()
            ));
        }

        Commands::Exec { command } => {
            let mut session = open_session(&output)?;
            session.run_line(&command.join(" "), &output)?;
        }

        Commands::Shell => {
            let mut session = open_session(&output)?;
            let failures = shell::run(&mut session, io::stdin().lock(), &output)?;
            if failures > 0 {
                anyhow::bail!("{} command(s) failed", failures);
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn open_session(output: &Output) -> Result<Session> {
    let workspace = Workspace::open_current()?;
    output.verbose_ctx("workspace", &format!("Using {}", workspace.root().display()));

    let session = Session::open(workspace)?;
    output.verbose_ctx(
        "workspace",
        &format!("Loaded {} person(s)", session.book().len()),
    );
    Ok(session)
}
