//! Path manipulation utilities for archive entries

use std::path::{Component, PathBuf};

/// Name of the single top-level directory in a branch snapshot.
///
/// Snapshots are rooted at `<repo>-<branch>`, with any `/` in the branch
/// name replaced by `-`.
pub fn archive_root(repository: &str, branch: &str) -> String {
    format!("{}-{}", repository, branch.replace('/', "-"))
}

/// Prefix an archive entry must carry to belong to `subpath`.
///
/// Always ends with `/` so that `docs` never matches `docs2/...`.
pub fn subtree_prefix(root: &str, subpath: &str) -> String {
    if subpath.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}/", root, subpath)
    }
}

/// Strip `prefix` from an entry name.
///
/// Returns `None` when the entry lies outside the prefix. The remainder is
/// empty for the subtree's own directory marker.
pub fn strip_entry_prefix<'a>(entry_name: &'a str, prefix: &str) -> Option<&'a str> {
    entry_name.strip_prefix(prefix)
}

/// Convert an archive entry name into a relative path that stays inside
/// the extraction directory.
///
/// Returns `None` for empty names and for names that are absolute or climb
/// out through `..`.
pub fn safe_relative_path(name: &str) -> Option<PathBuf> {
    // Zip names always use '/', but reject backslash tricks on every platform
    if name.contains('\\') {
        return None;
    }

    let mut path = PathBuf::new();
    for component in std::path::Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Last `/`-separated segment of a subpath, used as the destination
/// directory name.
pub fn last_segment(subpath: &str) -> &str {
    subpath.rsplit('/').next().unwrap_or(subpath)
}
