//! core::scan
//!
//! Directory scanning with deterministic ordering.
//!
//! # Ordering
//!
//! Positional pairing makes sort order the safety-critical invariant of the
//! whole tool: both trees must be listed in exactly the same order or pages
//! get silently mis-named. All listings therefore go through [`scan_sorted`],
//! which sorts by [`sort_key`] - ascending lexical order of the cleaned name,
//! raw name as the tie-breaker - instead of whatever order the OS returns
//! entries in.
//!
//! # Invariants
//!
//! - Read-only; never mutates the scanned tree
//! - Two scans of an unchanged directory produce identical output

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::entry::{cleaned_name, EntryFilter, EntryKind};

/// The sort key used for every listing: (cleaned name, raw name).
///
/// An entry whose name carries the invisible leading mark sorts exactly as if
/// the mark were absent.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use refoliate::core::scan::sort_key;
///
/// assert_eq!(sort_key(Path::new("/t/\u{feff}002")).0, "002");
/// assert!(sort_key(Path::new("/t/001")) < sort_key(Path::new("/t/\u{feff}002")));
/// ```
pub fn sort_key(path: &Path) -> (String, String) {
    let raw = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (cleaned_name(&raw).to_string(), raw)
}

/// List the entries of `dir` that satisfy `filter`, sorted by [`sort_key`].
///
/// Entry kinds are resolved following symlinks, so a symlink to a directory
/// counts as a directory. Entries that cannot be stat'ed (e.g. broken
/// symlinks) classify as [`EntryKind::Other`] and never match.
///
/// # Errors
///
/// Propagates the OS error if `dir` itself cannot be read.
pub fn scan_sorted(dir: &Path, filter: &EntryFilter) -> io::Result<Vec<PathBuf>> {
    let mut matched = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();

        if filter.matches(&name.to_string_lossy(), classify(&path)) {
            matched.push(path);
        }
    }

    matched.sort_by_key(|path| sort_key(path));
    Ok(matched)
}

/// Resolve an entry's kind, following symlinks.
fn classify(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Dir,
        Ok(meta) if meta.is_file() => EntryKind::File,
        _ => EntryKind::Other,
    }
}
