//! # Error Handling
//!
//! This module defines the centralized error type for `copy-folder-gitrepo`.
//! It uses `thiserror` to build a closed `Error` enum covering every way a
//! copy can fail, so callers can branch on the failure instead of parsing
//! message text.
//!
//! ## Key Components
//!
//! - **`Error`**: One variant per failure mode. Each carries enough context
//!   (the offending URL, HTTP status, or path) to produce a one-line message.
//! - **`ErrorKind`**: A fieldless tag for each variant, returned by
//!   [`Error::kind`].
//! - **`Result<T>`**: Alias for `std::result::Result<T, Error>`.
//!
//! All errors are terminal: the pipeline stops at the first one and nothing
//! already written to disk is rolled back.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for copy operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not a usable repository or folder URL.
    #[error("Invalid repository URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The default-branch lookup against the metadata endpoint failed.
    #[error("Failed to fetch repository metadata from {url}: {message}")]
    MetadataFetch { url: String, message: String },

    /// The archive download failed or returned a non-success status.
    #[error("Unable to download repository archive from {url}: {message}{}", status.map(|s| format!(" (status code: {})", s)).unwrap_or_default())]
    DownloadFailed {
        url: String,
        /// HTTP status when the server answered, `None` on transport errors
        status: Option<u16>,
        message: String,
    },

    /// The directory the extracted repository would be renamed to already exists.
    #[error("Destination already exists: {}", path.display())]
    DestinationConflict { path: PathBuf },

    /// The downloaded body could not be read as a zip archive.
    #[error("Invalid archive: {message}")]
    Archive { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    ///
    /// The wrapped error is part of the message and not exposed as a
    /// source, so reports print it once.
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// The category of an [`Error`], without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    MetadataFetch,
    DownloadFailed,
    DestinationConflict,
    Archive,
    Io,
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Error::MetadataFetch { .. } => ErrorKind::MetadataFetch,
            Error::DownloadFailed { .. } => ErrorKind::DownloadFailed,
            Error::DestinationConflict { .. } => ErrorKind::DestinationConflict,
            Error::Archive { .. } => ErrorKind::Archive,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Error::Io(io),
            other => Error::Archive {
                message: other.to_string(),
            },
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
