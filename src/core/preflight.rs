//! core::preflight
//!
//! Pre-flight gate: every check that must pass before the first rename.
//!
//! # Checks
//!
//! Run strictly in this order, each failure terminating the run:
//!
//! 1. The delivery tree yielded at least one derivative master
//! 2. The target tree yielded at least one numeric page directory
//! 3. Both listings have the same length
//! 4. The target tree is writable and searchable by the running identity
//!
//! Check 2 additionally warns when the target tree already contains exactly
//! as many work-prefixed directories as there are masters - the usual sign
//! that an earlier run already renamed this delivery. Check 4 is an
//! access-control query, not a trial write, and can be skipped for
//! filesystems where the query is unreliable.
//!
//! # Invariants
//!
//! - Never mutates either tree
//! - A failed gate means zero renames were attempted

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::entry::MARKER_SUFFIX;
use crate::core::perms;
use crate::ui::output::Output;

/// Errors from the pre-flight gate.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("no '*{}' master images found in delivery tree {}", MARKER_SUFFIX, .se_dir.display())]
    NoMarkers { se_dir: PathBuf },

    #[error("no numeric page directories found in target tree {}", .qnl_dir.display())]
    NoPageDirs { qnl_dir: PathBuf },

    #[error(
        "found {destinations} master images in the delivery tree but \
         {sources} numeric page directories in the target tree"
    )]
    CountMismatch { sources: usize, destinations: usize },

    #[error(
        "target tree {} is not writable by this user:\n  {listing}\n\
         re-run with --no-check-permissions if the access query is wrong \
         for this filesystem",
        .qnl_dir.display()
    )]
    TargetNotWritable { qnl_dir: PathBuf, listing: String },
}

/// Inputs to the gate, collected by the scan phase.
#[derive(Debug)]
pub struct Preflight<'a> {
    /// Delivery tree the markers came from.
    pub se_dir: &'a Path,
    /// Target tree whose page directories will be renamed.
    pub qnl_dir: &'a Path,
    /// Ordered numeric page directories (rename sources).
    pub sources: &'a [PathBuf],
    /// Ordered synthesized destinations, one per marker.
    pub destinations: &'a [PathBuf],
    /// Directories in the target tree already carrying the work prefix.
    pub already_named: usize,
    /// Whether to run the permission query (check 4).
    pub check_permissions: bool,
}

impl Preflight<'_> {
    /// Run all checks in order.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`PreflightError`]; nothing has
    /// been mutated when this returns.
    pub fn gate(&self, out: &Output) -> Result<(), PreflightError> {
        if self.destinations.is_empty() {
            return Err(PreflightError::NoMarkers {
                se_dir: self.se_dir.to_path_buf(),
            });
        }

        if self.sources.is_empty() {
            if self.already_named == self.destinations.len() {
                out.warn(format!(
                    "{} directories under {} already carry master-image names; \
                     this delivery was probably renamed by an earlier run",
                    self.already_named,
                    self.qnl_dir.display()
                ));
            }
            return Err(PreflightError::NoPageDirs {
                qnl_dir: self.qnl_dir.to_path_buf(),
            });
        }

        if self.sources.len() != self.destinations.len() {
            return Err(PreflightError::CountMismatch {
                sources: self.sources.len(),
                destinations: self.destinations.len(),
            });
        }

        if self.check_permissions && !perms::can_write_and_search(self.qnl_dir) {
            let listing = perms::long_listing(self.qnl_dir)
                .unwrap_or_else(|_| "(metadata unavailable)".to_string());
            return Err(PreflightError::TargetNotWritable {
                qnl_dir: self.qnl_dir.to_path_buf(),
                listing,
            });
        }

        Ok(())
    }
}
