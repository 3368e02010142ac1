//! Default values for copy-folder-gitrepo configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! library, ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Per-request timeout, in seconds, for metadata and archive requests.
///
/// This can be overridden by the `--timeout` CLI flag or the
/// `COPY_FOLDER_GITREPO_TIMEOUT` environment variable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Host prefix of the metadata API, relative to the web host
/// (`github.com` → `api.github.com`).
pub const API_HOST_PREFIX: &str = "api.";

/// Path segment that introduces `<branch>/<subpath...>` in a web URL.
pub const TREE_SEGMENT: &str = "tree";

/// Returns the per-request timeout as a `Duration`.
pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

/// Returns the `User-Agent` sent with every request.
///
/// The metadata API rejects requests without one.
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
