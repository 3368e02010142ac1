//! # Archive Extraction
//!
//! Materializes the contents of a downloaded branch snapshot on disk.
//!
//! The snapshot is held in memory and opened as a zip archive. Every entry
//! whose name starts with the requested prefix is written below the
//! destination with that prefix stripped; all other entries are skipped.
//! An empty prefix extracts the archive verbatim.
//!
//! Entry names that would land outside the destination are never written.
//! The destination itself is only created once a matching entry is found.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use log::{debug, warn};
use zip::ZipArchive;

use crate::error::Result;
use crate::path::{safe_relative_path, strip_entry_prefix};

/// What an extraction wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
    /// Matching entries refused because their name escapes the destination
    pub rejected: usize,
}

impl ExtractSummary {
    /// Whether any entry matched the prefix.
    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.directories == 0
    }
}

/// Name of the top-level directory the archive's first entry sits under.
///
/// Snapshot archives wrap everything in one root directory whose name the
/// host chooses, so it is read from the archive rather than predicted.
pub fn root_directory(archive: &[u8]) -> Result<Option<String>> {
    let zip = ZipArchive::new(Cursor::new(archive))?;
    let root = zip
        .file_names()
        .next()
        .and_then(|name| name.split('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string);
    Ok(root)
}

/// Extracts every entry of `archive` into `destination` unchanged.
pub fn extract_all(archive: &[u8], destination: &Path) -> Result<ExtractSummary> {
    extract_prefixed(archive, "", destination)
}

/// Extracts the entries under `prefix`, rewriting their names relative to it.
///
/// `prefix` should end with `/` so that only whole path segments match.
/// The entry equal to the prefix itself (the subtree's directory marker)
/// is skipped.
pub fn extract_prefixed(archive: &[u8], prefix: &str, destination: &Path) -> Result<ExtractSummary> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;
    debug!(
        "archive holds {} entries, extracting '{}' into {}",
        zip.len(),
        prefix,
        destination.display()
    );

    let mut summary = ExtractSummary::default();

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let name = entry.name().to_string();

        let Some(remainder) = strip_entry_prefix(&name, prefix) else {
            continue;
        };
        if remainder.is_empty() {
            continue;
        }
        let Some(relative) = safe_relative_path(remainder) else {
            warn!("Skipping archive entry outside the destination: {}", name);
            summary.rejected += 1;
            continue;
        };

        let out_path = destination.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out_file = fs::File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        summary.files += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o777))?;
            }
        }
    }

    Ok(summary)
}
