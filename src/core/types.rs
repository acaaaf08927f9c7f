//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`WorkId`] - Validated work identifier for a delivered book/object
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.

use std::path::Path;

use thiserror::Error;

use crate::core::entry::cleaned_name;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("cannot derive a work identifier from '{0}': no parent directory name")]
    NoParentName(String),
}

/// The identifier of a delivered work, taken from the name of the directory
/// that contains the delivery tree.
///
/// A delivery for work `BK00123` arrives as `.../BK00123/se` (masters) next
/// to `.../BK00123/qnl` (derived pages), so the identifier is the basename of
/// the delivery directory's parent. Page directories that have already been
/// aligned carry this identifier as a name prefix, which is what the
/// pre-flight heuristic looks for.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use refoliate::core::types::WorkId;
///
/// let id = WorkId::from_delivery_dir(Path::new("/delivery/BK00123/se")).unwrap();
/// assert_eq!(id.as_str(), "BK00123");
///
/// // The filesystem root has no parent name to derive from.
/// assert!(WorkId::from_delivery_dir(Path::new("/se")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkId(String);

impl WorkId {
    /// Derive the work identifier from a delivery directory path.
    ///
    /// Takes the basename of the path's parent, with the same name cleaning
    /// applied everywhere else names are compared.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::NoParentName` if the path has no parent with a
    /// non-empty basename (e.g. the filesystem root).
    pub fn from_delivery_dir(dir: &Path) -> Result<Self, TypeError> {
        let name = dir
            .parent()
            .and_then(Path::file_name)
            .map(|n| cleaned_name(&n.to_string_lossy()).to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| TypeError::NoParentName(dir.display().to_string()))?;

        Ok(Self(name))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
