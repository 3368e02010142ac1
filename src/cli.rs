//! CLI argument parsing and dispatch

use anyhow::Result;
use clap::{CommandFactory, Parser};

use copy_folder_gitrepo::output::ColorChoice;

use crate::commands;

const EXAMPLES: &str = "\
Examples:
  copy-folder-gitrepo https://github.com/DataTalksClub/mlops-zoomcamp/tree/main/cohorts/2024/06-best-practices
  copy-folder-gitrepo https://github.com/DataTalksClub/mlops-zoomcamp";

/// Copy a folder from a GitHub repository to the current directory.
///
/// If the URL names no folder, the entire repository is copied.
#[derive(Parser, Debug)]
#[command(name = "copy-folder-gitrepo")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    copy: commands::copy::CopyArgs,

    /// Colorize output
    #[arg(long, value_name = "WHEN", value_enum, ignore_case = true, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Anything but exactly one URL gets the usage text, not an error
        if !self.copy.has_single_url() {
            Self::command().print_help()?;
            println!();
            return Ok(());
        }

        init_logging(&self.log_level);
        commands::copy::execute(self.copy, self.color)
    }
}

/// Initialise `env_logger`; `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
