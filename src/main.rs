//! # copy-folder-gitrepo CLI
//!
//! This is the binary entry point for the `copy-folder-gitrepo` command-line
//! tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and output preferences.
//! - Running the copy and translating failures into a one-line message and
//!   a non-zero exit code.
//!
//! The copy itself lives in the library crate, so the binary stays a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Usage errors share the failure exit code
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };
    cli.execute()
}
