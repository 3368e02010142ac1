//! # Repository Copying
//!
//! This module provides the `RepositoryCopier`, the high-level entry point
//! that runs the whole pipeline for one URL:
//!
//! 1.  **Resolve**: parse the URL and, for bare repository URLs, look up the
//!     default branch.
//! 2.  **Preflight**: for whole-repository copies, refuse to continue if the
//!     rename target already exists, before anything is downloaded.
//! 3.  **Download**: fetch the branch snapshot as a zip archive.
//! 4.  **Extract**: write the requested subtree (or everything) to disk.
//! 5.  **Rename**: move the extracted root (normally `<repo>-<branch>`,
//!     but read from the archive) to `<repo>`.
//!
//! ## Design
//!
//! Network access goes through the `HostOperations` trait held by the
//! copier. `RepositoryCopier::new` wires in `HttpHostOperations`; tests use
//! `with_operations` to inject fixed metadata and archive bytes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

use crate::archive::{self, ExtractSummary};
use crate::error::{Error, Result};
use crate::host::{HostOperations, HttpHostOperations};
use crate::path;
use crate::resolver::{self, Endpoints, FetchPlan};

/// Options for a single copy.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Directory the copy is placed in
    pub output_dir: PathBuf,
    /// Override for the metadata API base URL
    pub api_url: Option<String>,
    /// Leave a whole-repository copy under its `<repo>-<branch>` name
    pub keep_root: bool,
}

impl CopyOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            api_url: None,
            keep_root: false,
        }
    }
}

/// The result of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub plan: FetchPlan,
    /// Where the copied files ended up
    pub destination: PathBuf,
    pub summary: ExtractSummary,
}

impl CopyOutcome {
    /// Human-readable description of what was copied.
    pub fn describe_source(&self) -> &str {
        if self.plan.is_whole_repository() {
            "entire repository"
        } else {
            &self.plan.subpath
        }
    }
}

/// Renames the extracted archive root `<output_dir>/<root>` to
/// `<output_dir>/<repository>`.
///
/// Fails with `DestinationConflict` rather than merging into an existing
/// directory.
pub fn rename_extracted_root(output_dir: &Path, root: &str, repository: &str) -> Result<PathBuf> {
    let target = output_dir.join(repository);
    if target.exists() {
        return Err(Error::DestinationConflict { path: target });
    }
    fs::rename(output_dir.join(root), &target)?;
    Ok(target)
}

/// The main entry point for copying out of a remote repository.
pub struct RepositoryCopier {
    host_ops: Box<dyn HostOperations>,
}

impl RepositoryCopier {
    /// Creates a copier that talks HTTP with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            host_ops: Box::new(HttpHostOperations::new(timeout)?),
        })
    }

    /// Creates a copier with a custom `HostOperations` implementation.
    ///
    /// This is primarily used for testing to inject fixed responses.
    pub fn with_operations(host_ops: Box<dyn HostOperations>) -> Self {
        Self { host_ops }
    }

    /// Resolves `url` into a fetch plan and the endpoints to fetch it from.
    pub fn plan(&self, url: &str, api_url: Option<&str>) -> Result<(FetchPlan, Endpoints)> {
        let repo_url = resolver::parse_repo_url(url)?;
        let endpoints = Endpoints::for_url(&repo_url, api_url);
        let plan = resolver::resolve(&repo_url, &endpoints, self.host_ops.as_ref())?;
        Ok((plan, endpoints))
    }

    /// Copies the folder or repository named by `url` into
    /// `options.output_dir`.
    pub fn copy(&self, url: &str, options: &CopyOptions) -> Result<CopyOutcome> {
        let (plan, endpoints) = self.plan(url, options.api_url.as_deref())?;
        info!(
            "Resolved {} to {}/{}@{} path '{}'",
            url, plan.owner, plan.repository, plan.branch, plan.subpath
        );
        self.fetch(&plan, &endpoints, options)
    }

    /// Downloads and extracts an already resolved plan.
    pub fn fetch(
        &self,
        plan: &FetchPlan,
        endpoints: &Endpoints,
        options: &CopyOptions,
    ) -> Result<CopyOutcome> {
        let rename = plan.is_whole_repository() && !options.keep_root;
        if rename {
            let target = options.output_dir.join(&plan.repository);
            if target.exists() {
                return Err(Error::DestinationConflict { path: target });
            }
        }

        let archive_url = endpoints.archive_url(plan);
        let bytes = self.host_ops.download_archive(&archive_url)?;
        info!("Downloaded {} ({} bytes)", archive_url, bytes.len());

        let root = match archive::root_directory(&bytes)? {
            Some(root) => root,
            None => plan.archive_root(),
        };
        if root != plan.archive_root() {
            debug!("Archive root is '{}', not '{}'", root, plan.archive_root());
        }

        if plan.is_whole_repository() {
            let summary = archive::extract_all(&bytes, &options.output_dir)?;
            let destination = if rename {
                rename_extracted_root(&options.output_dir, &root, &plan.repository)?
            } else {
                options.output_dir.join(root)
            };
            return Ok(CopyOutcome {
                plan: plan.clone(),
                destination,
                summary,
            });
        }

        let destination = options.output_dir.join(plan.destination_name());
        let prefix = path::subtree_prefix(&root, &plan.subpath);
        let summary = archive::extract_prefixed(&bytes, &prefix, &destination)?;
        if summary.is_empty() {
            warn!(
                "No entries found under '{}' on branch '{}'",
                plan.subpath, plan.branch
            );
        }

        Ok(CopyOutcome {
            plan: plan.clone(),
            destination,
            summary,
        })
    }
}
