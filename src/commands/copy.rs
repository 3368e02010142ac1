//! # Copy Command Implementation
//!
//! Resolves the URL, downloads the branch snapshot and extracts the
//! requested folder (or the whole repository) below the output directory,
//! then prints a one-line status message.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use copy_folder_gitrepo::defaults::DEFAULT_TIMEOUT_SECS;
use copy_folder_gitrepo::output::{spinner, ColorChoice, OutputConfig, Status};
use copy_folder_gitrepo::repository::{CopyOptions, RepositoryCopier};

/// Arguments for copying a folder or repository
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// The URL of the folder or repository, e.g.
    /// https://github.com/<owner>/<repo>/tree/<branch>/<path>
    #[arg(value_name = "GITHUB_URL")]
    pub urls: Vec<String>,

    /// Directory to place the copy in (defaults to current directory)
    #[arg(short, long, value_name = "DIR", env = "COPY_FOLDER_GITREPO_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Base URL of the repository metadata API (defaults to https://api.<host>)
    #[arg(long, value_name = "URL", env = "COPY_FOLDER_GITREPO_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", env = "COPY_FOLDER_GITREPO_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Keep the extracted `<repo>-<branch>` directory name when copying a whole repository
    #[arg(long)]
    pub keep_root: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CopyArgs {
    /// Whether exactly one URL was given.
    pub fn has_single_url(&self) -> bool {
        self.urls.len() == 1
    }
}

/// Execute the copy
pub fn execute(args: CopyArgs, color: ColorChoice) -> Result<()> {
    let out = OutputConfig::new(color);
    let url = match args.urls.first() {
        Some(url) => url.as_str(),
        None => anyhow::bail!("No repository URL given"),
    };

    let options = CopyOptions {
        output_dir: args.output.clone().unwrap_or_else(|| PathBuf::from(".")),
        api_url: args.api_url.clone(),
        keep_root: args.keep_root,
    };

    let copier = RepositoryCopier::new(Duration::from_secs(args.timeout))?;
    let progress = spinner(!args.quiet, format!("Fetching {}", url));
    let result = copier.copy(url, &options);
    progress.finish_and_clear();

    let outcome = result?;

    if !args.quiet {
        println!(
            "{} Copied {} from {}/{} to {}",
            Status::Ok.marker(&out),
            outcome.describe_source(),
            outcome.plan.owner,
            outcome.plan.repository,
            outcome.destination.display()
        );
        if outcome.summary.rejected > 0 {
            println!(
                "{} Skipped {} archive entries with unsafe paths",
                Status::Warn.marker(&out),
                outcome.summary.rejected
            );
        }
    }

    Ok(())
}
