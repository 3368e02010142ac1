//! # Copy Folder from a Git Repository
//!
//! This library copies a single folder, or a whole repository, out of a
//! hosted git repository without cloning it. It is the core of the
//! `copy-folder-gitrepo` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use copy_folder_gitrepo::resolver::parse_repo_url;
//!
//! let url = parse_repo_url("https://github.com/acme/widgets/tree/main/src/lib").unwrap();
//! assert_eq!(url.owner, "acme");
//! assert_eq!(url.repository, "widgets");
//! assert_eq!(url.branch.as_deref(), Some("main"));
//! assert_eq!(url.subpath, "src/lib");
//! ```
//!
//! ## Execution Flow
//!
//! The main entry point is `repository::RepositoryCopier`, which runs:
//!
//! 1.  **Resolution** (`resolver`): parse the URL into owner, repository,
//!     branch and subpath, asking the host for the default branch when the
//!     URL names none.
//! 2.  **Download** (`host`): fetch the branch snapshot as a zip archive.
//! 3.  **Extraction** (`archive`, `path`): write only the entries under the
//!     requested subpath, relative to it.
//! 4.  **Rename** (`repository`): for whole-repository copies, move the
//!     `<repo>-<branch>` root to `<repo>`.
//!
//! All failures are reported through the closed `error::Error` enum.

pub mod archive;
pub mod defaults;
pub mod error;
pub mod host;
pub mod output;
pub mod path;
pub mod repository;
pub mod resolver;

#[cfg(test)]
mod path_proptest;
