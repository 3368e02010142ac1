//! # Host Operations
//!
//! Network access to the repository host is confined to the
//! [`HostOperations`] trait: one call to look up a repository's default
//! branch and one call to download a branch archive. The rest of the crate
//! only sees this trait, so tests can substitute fixed metadata and zip
//! bytes without touching the network.
//!
//! [`HttpHostOperations`] is the real implementation, built on a blocking
//! `reqwest` client with a per-request timeout.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};

/// Trait for host operations - allows mocking in tests
pub trait HostOperations: Send + Sync {
    /// Queries the metadata endpoint at `metadata_url` and returns the
    /// repository's default branch.
    fn default_branch(&self, metadata_url: &str) -> Result<String>;

    /// Downloads the archive at `archive_url` and returns its bytes.
    fn download_archive(&self, archive_url: &str) -> Result<Vec<u8>>;
}

/// The subset of the repository metadata document this tool reads.
#[derive(Debug, Deserialize)]
struct RepositoryMetadata {
    default_branch: Option<String>,
}

/// Extracts `default_branch` from a metadata JSON body.
pub fn parse_default_branch(metadata_url: &str, body: &[u8]) -> Result<String> {
    let metadata: RepositoryMetadata =
        serde_json::from_slice(body).map_err(|e| Error::MetadataFetch {
            url: metadata_url.to_string(),
            message: format!("invalid metadata response: {}", e),
        })?;

    match metadata.default_branch {
        Some(branch) if !branch.is_empty() => Ok(branch),
        _ => Err(Error::MetadataFetch {
            url: metadata_url.to_string(),
            message: "response has no default_branch".to_string(),
        }),
    }
}

/// The default implementation of `HostOperations`, which talks HTTP to the
/// repository host.
pub struct HttpHostOperations {
    client: Client,
}

impl HttpHostOperations {
    /// Creates a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(defaults::user_agent())
            .build()
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
        Ok(Self { client })
    }
}

impl HostOperations for HttpHostOperations {
    fn default_branch(&self, metadata_url: &str) -> Result<String> {
        debug!("GET {}", metadata_url);
        let fail = |message: String| Error::MetadataFetch {
            url: metadata_url.to_string(),
            message,
        };

        let response = self
            .client
            .get(metadata_url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| fail(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(format!("status code: {}", status.as_u16())));
        }

        let body = response.bytes().map_err(|e| fail(e.to_string()))?;
        parse_default_branch(metadata_url, &body)
    }

    fn download_archive(&self, archive_url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", archive_url);
        let response = self
            .client
            .get(archive_url)
            .send()
            .map_err(|e| Error::DownloadFailed {
                url: archive_url.to_string(),
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DownloadFailed {
                url: archive_url.to_string(),
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response.bytes().map_err(|e| Error::DownloadFailed {
            url: archive_url.to_string(),
            status: Some(status.as_u16()),
            message: e.to_string(),
        })?;
        debug!("downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}
