//! core::entry
//!
//! Entry classification and filter predicates.
//!
//! # Design
//!
//! The three listings the tool works from are selected by a fixed set of
//! filter strategies, modeled as [`EntryFilter`]. Each predicate is a pure
//! function over an entry's name and kind so it can be tested without a
//! filesystem; the scanner supplies both.
//!
//! # Name cleaning
//!
//! Delivered trees occasionally carry a leading U+FEFF mark in entry names.
//! The mark is invisible but changes lexical ordering and defeats prefix
//! tests, so [`cleaned_name`] strips a single leading occurrence and is
//! applied consistently wherever names are compared, sorted, or matched.

use crate::core::types::WorkId;

/// Suffix that marks a derivative-generation master image for one page,
/// e.g. `000001_d.tif`.
pub const MARKER_SUFFIX: &str = "_d.tif";

/// Invisible mark occasionally prefixed to delivered entry names.
pub const NAME_MARK: char = '\u{feff}';

/// Strip a single leading [`NAME_MARK`] from an entry name.
///
/// # Example
///
/// ```
/// use refoliate::core::entry::cleaned_name;
///
/// assert_eq!(cleaned_name("\u{feff}000001"), "000001");
/// assert_eq!(cleaned_name("000001"), "000001");
/// ```
pub fn cleaned_name(name: &str) -> &str {
    name.strip_prefix(NAME_MARK).unwrap_or(name)
}

/// What a directory entry is, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Anything else, including broken symlinks and unreadable entries.
    Other,
}

/// The fixed filter strategies used to build the tool's listings.
#[derive(Debug, Clone, Copy)]
pub enum EntryFilter<'a> {
    /// Regular files whose name ends with [`MARKER_SUFFIX`].
    MarkerFile,
    /// Directories whose cleaned name is entirely ASCII decimal digits.
    NumericDir,
    /// Directories whose cleaned name starts with the work identifier.
    WorkPrefix(&'a WorkId),
}

impl EntryFilter<'_> {
    /// Whether an entry with this name and kind satisfies the filter.
    pub fn matches(&self, name: &str, kind: EntryKind) -> bool {
        let name = cleaned_name(name);
        match self {
            EntryFilter::MarkerFile => kind == EntryKind::File && name.ends_with(MARKER_SUFFIX),
            EntryFilter::NumericDir => {
                kind == EntryKind::Dir
                    && !name.is_empty()
                    && name.bytes().all(|b| b.is_ascii_digit())
            }
            EntryFilter::WorkPrefix(id) => kind == EntryKind::Dir && name.starts_with(id.as_str()),
        }
    }
}
